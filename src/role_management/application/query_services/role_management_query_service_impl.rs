use std::sync::Arc;

use async_trait::async_trait;

use crate::role_management::{
    domain::{
        model::{
            enums::role_management_domain_error::RoleManagementDomainError,
            queries::list_user_roles_query::ListUserRolesQuery,
        },
        services::role_management_query_service::RoleManagementQueryService,
    },
    infrastructure::persistence::repositories::role_assignment_repository::RoleAssignmentRepository,
};

pub struct RoleManagementQueryServiceImpl {
    role_assignment_repository: Arc<dyn RoleAssignmentRepository>,
}

impl RoleManagementQueryServiceImpl {
    pub fn new(role_assignment_repository: Arc<dyn RoleAssignmentRepository>) -> Self {
        Self {
            role_assignment_repository,
        }
    }
}

#[async_trait]
impl RoleManagementQueryService for RoleManagementQueryServiceImpl {
    async fn handle_list_user_roles(
        &self,
        query: ListUserRolesQuery,
    ) -> Result<Vec<String>, RoleManagementDomainError> {
        self.role_assignment_repository
            .find_roles_by_user(query.user_id())
            .await
    }
}
