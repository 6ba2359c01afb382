use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoleManagementDomainError {
    #[error("user id is invalid")]
    InvalidUserId,

    #[error("role name is invalid")]
    InvalidRoleName,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
