use std::sync::Arc;

use async_trait::async_trait;

use crate::role_management::{
    domain::{
        model::{
            commands::assign_role_to_user_command::AssignRoleToUserCommand,
            enums::role_management_domain_error::RoleManagementDomainError,
        },
        services::role_management_command_service::RoleManagementCommandService,
    },
    infrastructure::persistence::repositories::role_assignment_repository::RoleAssignmentRepository,
};

pub struct RoleManagementCommandServiceImpl {
    role_assignment_repository: Arc<dyn RoleAssignmentRepository>,
}

impl RoleManagementCommandServiceImpl {
    pub fn new(role_assignment_repository: Arc<dyn RoleAssignmentRepository>) -> Self {
        Self {
            role_assignment_repository,
        }
    }
}

#[async_trait]
impl RoleManagementCommandService for RoleManagementCommandServiceImpl {
    async fn handle_assign_role(
        &self,
        command: AssignRoleToUserCommand,
    ) -> Result<(), RoleManagementDomainError> {
        self.role_assignment_repository
            .assign_role(command.user_id(), command.role_name())
            .await?;

        tracing::info!(
            user_id = %command.user_id().value(),
            role_name = command.role_name().value(),
            "role assigned"
        );

        Ok(())
    }
}
