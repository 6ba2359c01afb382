use async_trait::async_trait;

use crate::role_management::domain::model::{
    enums::role_management_domain_error::RoleManagementDomainError,
    queries::list_user_roles_query::ListUserRolesQuery,
};

#[async_trait]
pub trait RoleManagementQueryService: Send + Sync {
    async fn handle_list_user_roles(
        &self,
        query: ListUserRolesQuery,
    ) -> Result<Vec<String>, RoleManagementDomainError>;
}
