use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::role_management::domain::model::{
    enums::role_management_domain_error::RoleManagementDomainError,
    value_objects::{role_name::RoleName, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct RoleAssignmentRecord {
    pub user_id: Uuid,
    pub role_name: String,
    pub assigned_at: DateTime<Utc>,
}

#[async_trait]
pub trait RoleAssignmentRepository: Send + Sync {
    async fn assign_role(
        &self,
        user_id: &UserId,
        role_name: &RoleName,
    ) -> Result<(), RoleManagementDomainError>;

    async fn find_roles_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<String>, RoleManagementDomainError>;
}
