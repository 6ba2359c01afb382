use async_trait::async_trait;

use crate::distance::domain::{
    model::{
        enums::{distance_domain_error::DistanceDomainError, distance_unit::DistanceUnit},
        queries::calculate_distance_query::CalculateDistanceQuery,
        value_objects::geo_coordinate::GeoCoordinate,
    },
    services::distance_calculation_service::{DistanceCalculationService, DistanceMeasurement},
};

const MEAN_EARTH_RADIUS_KILOMETERS: f64 = 6_371.008_8;

pub struct HaversineDistanceCalculationServiceImpl {
    default_unit: DistanceUnit,
    precision: u8,
}

impl HaversineDistanceCalculationServiceImpl {
    pub fn new(default_unit: DistanceUnit, precision: u8) -> Self {
        Self {
            default_unit,
            precision,
        }
    }

    fn great_circle_kilometers(origin: &GeoCoordinate, destination: &GeoCoordinate) -> f64 {
        let origin_latitude = origin.latitude().to_radians();
        let destination_latitude = destination.latitude().to_radians();
        let latitude_delta = (destination.latitude() - origin.latitude()).to_radians();
        let longitude_delta = (destination.longitude() - origin.longitude()).to_radians();

        let half_chord = (latitude_delta / 2.0).sin().powi(2)
            + origin_latitude.cos()
                * destination_latitude.cos()
                * (longitude_delta / 2.0).sin().powi(2);

        // sqrt can drift past 1.0 for antipodal points
        2.0 * MEAN_EARTH_RADIUS_KILOMETERS * half_chord.sqrt().min(1.0).asin()
    }

    fn round_to_precision(&self, value: f64) -> f64 {
        let scale = 10f64.powi(i32::from(self.precision));
        (value * scale).round() / scale
    }
}

#[async_trait]
impl DistanceCalculationService for HaversineDistanceCalculationServiceImpl {
    async fn handle_calculate_distance(
        &self,
        query: CalculateDistanceQuery,
    ) -> Result<DistanceMeasurement, DistanceDomainError> {
        let unit = query.unit().unwrap_or(self.default_unit);
        let kilometers = Self::great_circle_kilometers(query.origin(), query.destination());
        let value = self.round_to_precision(kilometers * unit.factor_from_kilometers());

        tracing::debug!(distance = value, unit = unit.as_str(), "distance calculated");

        Ok(DistanceMeasurement { value, unit })
    }
}
