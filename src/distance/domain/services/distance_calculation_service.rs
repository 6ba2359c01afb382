use async_trait::async_trait;

use crate::distance::domain::model::{
    enums::{distance_domain_error::DistanceDomainError, distance_unit::DistanceUnit},
    queries::calculate_distance_query::CalculateDistanceQuery,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceMeasurement {
    pub value: f64,
    pub unit: DistanceUnit,
}

#[async_trait]
pub trait DistanceCalculationService: Send + Sync {
    async fn handle_calculate_distance(
        &self,
        query: CalculateDistanceQuery,
    ) -> Result<DistanceMeasurement, DistanceDomainError>;
}
