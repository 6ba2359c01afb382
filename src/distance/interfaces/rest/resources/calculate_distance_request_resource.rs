use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CalculateDistanceRequestResource {
    #[validate(range(min = -90.0, max = 90.0))]
    pub origin_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub origin_longitude: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    pub destination_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub destination_longitude: f64,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CalculateDistanceResponseResource {
    pub distance: f64,
    pub unit: String,
}
