use axum::Router;
use dotenvy::dotenv;
use fieldops_axum_api::{
    config::app_config::AppConfig,
    distance::{
        build_distance_router,
        interfaces::rest::resources::{
            calculate_distance_request_resource::{
                CalculateDistanceRequestResource, CalculateDistanceResponseResource,
            },
            distance_error_response_resource::DistanceErrorResponseResource,
        },
    },
    role_management::{
        build_role_management_router,
        interfaces::rest::resources::{
            assign_role_request_resource::AssignRoleRequestResource,
            role_catalog_resource::RoleCatalogEntryResource,
            role_management_error_response_resource::RoleManagementErrorResponseResource,
            user_roles_resource::UserRolesResource,
        },
    },
};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        fieldops_axum_api::distance::interfaces::rest::controllers::distance_rest_controller::calculate_distance,
        fieldops_axum_api::role_management::interfaces::rest::controllers::role_management_rest_controller::assign_role_to_user,
        fieldops_axum_api::role_management::interfaces::rest::controllers::role_management_rest_controller::list_user_roles,
        fieldops_axum_api::role_management::interfaces::rest::controllers::role_management_rest_controller::list_role_catalog
    ),
    components(
        schemas(
            CalculateDistanceRequestResource,
            CalculateDistanceResponseResource,
            DistanceErrorResponseResource,
            AssignRoleRequestResource,
            UserRolesResource,
            RoleCatalogEntryResource,
            RoleManagementErrorResponseResource
        )
    ),
    tags(
        (name = "distance", description = "Distance calculation bounded context"),
        (name = "role-management", description = "User role management bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let distance_router = build_distance_router(&config).expect("failed to build distance router");
    let role_management_router = build_role_management_router();

    let app = Router::new()
        .merge(distance_router)
        .merge(role_management_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("Servidor corriendo en http://localhost:{}", config.port);
    tracing::info!(
        "Swagger UI disponible en http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
