use fieldops_axum_api::{
    config::app_config::AppConfig,
    distance::{
        build_distance_calculation_service, build_distance_router,
        domain::services::distance_calculation_service::DistanceCalculationService,
    },
};

use crate::support::equator_degree_query;

fn config_with_unit(unit: &str) -> AppConfig {
    AppConfig {
        port: 8080,
        distance_unit: unit.to_string(),
        distance_precision: 3,
    }
}

#[tokio::test]
async fn build_distance_calculation_service_resolves_from_config() {
    let service = build_distance_calculation_service(&config_with_unit("kilometers"))
        .expect("service should build from configuration");

    let measurement = service
        .handle_calculate_distance(equator_degree_query())
        .await
        .expect("built service should calculate");

    assert!(measurement.value > 0.0);
}

#[test]
fn build_distance_calculation_service_rejects_unknown_configured_unit() {
    let result = build_distance_calculation_service(&config_with_unit("leagues"));

    assert!(result.is_err());
}

#[test]
fn build_distance_router_builds_from_configuration() {
    let result = build_distance_router(&config_with_unit("miles"));

    assert!(result.is_ok());
}
