use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::role_management::{
    domain::{
        model::{
            commands::assign_role_to_user_command::AssignRoleToUserCommand,
            enums::{
                known_role_name::KnownRoleName,
                role_management_domain_error::RoleManagementDomainError,
            },
            queries::list_user_roles_query::ListUserRolesQuery,
        },
        services::{
            role_management_command_service::RoleManagementCommandService,
            role_management_query_service::RoleManagementQueryService,
        },
    },
    interfaces::rest::resources::{
        assign_role_request_resource::AssignRoleRequestResource,
        role_catalog_resource::RoleCatalogEntryResource,
        role_management_error_response_resource::RoleManagementErrorResponseResource,
        user_roles_resource::UserRolesResource,
    },
};

#[derive(Clone)]
pub struct RoleManagementRestControllerState {
    pub command_service: Arc<dyn RoleManagementCommandService>,
    pub query_service: Arc<dyn RoleManagementQueryService>,
}

pub fn router(state: RoleManagementRestControllerState) -> Router {
    Router::new()
        .route(
            "/role-management/users/:user_id/role",
            post(assign_role_to_user),
        )
        .route(
            "/role-management/users/:user_id/roles",
            get(list_user_roles),
        )
        .route("/role-management/roles/catalog", get(list_role_catalog))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/role-management/users/{user_id}/role",
    tag = "role-management",
    params(
        ("user_id" = String, Path, description = "Subject receiving the role")
    ),
    request_body = AssignRoleRequestResource,
    responses(
        (status = 204, description = "Role assigned"),
        (status = 400, description = "Invalid request", body = RoleManagementErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RoleManagementErrorResponseResource)
    )
)]
pub async fn assign_role_to_user(
    State(state): State<RoleManagementRestControllerState>,
    Path(user_id): Path<String>,
    Json(request): Json<AssignRoleRequestResource>,
) -> Result<StatusCode, (StatusCode, Json<RoleManagementErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(RoleManagementErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command =
        AssignRoleToUserCommand::new(user_id, request.role_name).map_err(map_domain_error)?;

    state
        .command_service
        .handle_assign_role(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/role-management/users/{user_id}/roles",
    tag = "role-management",
    params(
        ("user_id" = String, Path, description = "Subject whose roles are listed")
    ),
    responses(
        (status = 200, description = "Roles assigned to the subject", body = UserRolesResource),
        (status = 400, description = "Invalid request", body = RoleManagementErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RoleManagementErrorResponseResource)
    )
)]
pub async fn list_user_roles(
    State(state): State<RoleManagementRestControllerState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRolesResource>, (StatusCode, Json<RoleManagementErrorResponseResource>)> {
    let query = ListUserRolesQuery::new(user_id).map_err(map_domain_error)?;
    let subject_id = query.user_id().value();

    let role_names = state
        .query_service
        .handle_list_user_roles(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(UserRolesResource {
        user_id: subject_id.to_string(),
        role_names,
    }))
}

#[utoipa::path(
    get,
    path = "/role-management/roles/catalog",
    tag = "role-management",
    responses(
        (status = 200, description = "Documented roles", body = [RoleCatalogEntryResource])
    )
)]
pub async fn list_role_catalog() -> Json<Vec<RoleCatalogEntryResource>> {
    let catalog = KnownRoleName::all()
        .iter()
        .map(|role| RoleCatalogEntryResource {
            role_name: role.as_str().to_string(),
            description: role.description().to_string(),
        })
        .collect();

    Json(catalog)
}

fn map_domain_error(
    error: RoleManagementDomainError,
) -> (StatusCode, Json<RoleManagementErrorResponseResource>) {
    let status = match error {
        RoleManagementDomainError::InvalidUserId | RoleManagementDomainError::InvalidRoleName => {
            StatusCode::BAD_REQUEST
        }
        RoleManagementDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(RoleManagementErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
