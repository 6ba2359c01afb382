use fieldops_axum_api::distance::{
    application::query_services::haversine_distance_calculation_service_impl::HaversineDistanceCalculationServiceImpl,
    domain::model::enums::distance_unit::DistanceUnit,
};

pub struct DistanceHarness {
    pub service: HaversineDistanceCalculationServiceImpl,
}

pub fn create_distance_harness() -> DistanceHarness {
    create_distance_harness_with(DistanceUnit::Kilometers, 3)
}

pub fn create_distance_harness_with(default_unit: DistanceUnit, precision: u8) -> DistanceHarness {
    DistanceHarness {
        service: HaversineDistanceCalculationServiceImpl::new(default_unit, precision),
    }
}
