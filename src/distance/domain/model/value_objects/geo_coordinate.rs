use crate::distance::domain::model::enums::distance_domain_error::DistanceDomainError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DistanceDomainError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DistanceDomainError::InvalidCoordinate);
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DistanceDomainError::InvalidCoordinate);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
