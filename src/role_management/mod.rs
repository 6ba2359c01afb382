use std::sync::Arc;

use axum::Router;

use crate::role_management::{
    application::{
        command_services::role_management_command_service_impl::RoleManagementCommandServiceImpl,
        query_services::role_management_query_service_impl::RoleManagementQueryServiceImpl,
    },
    infrastructure::persistence::repositories::in_memory::in_memory_role_assignment_repository_impl::InMemoryRoleAssignmentRepositoryImpl,
    interfaces::rest::controllers::role_management_rest_controller::{
        RoleManagementRestControllerState, router,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_role_management_router() -> Router {
    let role_assignment_repository = Arc::new(InMemoryRoleAssignmentRepositoryImpl::new());

    let command_service = Arc::new(RoleManagementCommandServiceImpl::new(
        role_assignment_repository.clone(),
    ));
    let query_service = Arc::new(RoleManagementQueryServiceImpl::new(role_assignment_repository));

    router(RoleManagementRestControllerState {
        command_service,
        query_service,
    })
}
