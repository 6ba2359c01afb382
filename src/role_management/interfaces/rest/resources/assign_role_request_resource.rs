use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AssignRoleRequestResource {
    /// Documented values: OPERATOR, ADMIN, PROVIDER_MANAGER, TECHNICIAN.
    /// Any string is accepted; the catalog is informational.
    #[serde(rename = "roleName")]
    #[schema(example = "TECHNICIAN")]
    pub role_name: String,
}
