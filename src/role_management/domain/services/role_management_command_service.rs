use async_trait::async_trait;

use crate::role_management::domain::model::{
    commands::assign_role_to_user_command::AssignRoleToUserCommand,
    enums::role_management_domain_error::RoleManagementDomainError,
};

#[async_trait]
pub trait RoleManagementCommandService: Send + Sync {
    async fn handle_assign_role(
        &self,
        command: AssignRoleToUserCommand,
    ) -> Result<(), RoleManagementDomainError>;
}
