use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    distance::{
        application::query_services::haversine_distance_calculation_service_impl::HaversineDistanceCalculationServiceImpl,
        domain::{
            model::enums::distance_unit::DistanceUnit,
            services::distance_calculation_service::DistanceCalculationService,
        },
        interfaces::rest::controllers::distance_rest_controller::{
            DistanceRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

/// Exported provider of the distance capability, wired from configuration.
pub fn build_distance_calculation_service(
    config: &AppConfig,
) -> Result<Arc<dyn DistanceCalculationService>, String> {
    let default_unit = DistanceUnit::parse(&config.distance_unit).map_err(|e| e.to_string())?;

    Ok(Arc::new(HaversineDistanceCalculationServiceImpl::new(
        default_unit,
        config.distance_precision,
    )))
}

pub fn build_distance_router(config: &AppConfig) -> Result<Router, String> {
    let distance_calculation_service = build_distance_calculation_service(config)?;

    Ok(router(DistanceRestControllerState {
        distance_calculation_service,
    }))
}
