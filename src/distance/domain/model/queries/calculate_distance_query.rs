use crate::distance::domain::model::{
    enums::{distance_domain_error::DistanceDomainError, distance_unit::DistanceUnit},
    value_objects::geo_coordinate::GeoCoordinate,
};

pub struct CalculateDistanceQueryParts {
    pub origin_latitude: f64,
    pub origin_longitude: f64,
    pub destination_latitude: f64,
    pub destination_longitude: f64,
    pub unit: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CalculateDistanceQuery {
    origin: GeoCoordinate,
    destination: GeoCoordinate,
    unit: Option<DistanceUnit>,
}

impl CalculateDistanceQuery {
    pub fn new(parts: CalculateDistanceQueryParts) -> Result<Self, DistanceDomainError> {
        let origin = GeoCoordinate::new(parts.origin_latitude, parts.origin_longitude)?;
        let destination =
            GeoCoordinate::new(parts.destination_latitude, parts.destination_longitude)?;
        let unit = match parts.unit {
            Some(raw) => Some(DistanceUnit::parse(&raw)?),
            None => None,
        };

        Ok(Self {
            origin,
            destination,
            unit,
        })
    }

    pub fn origin(&self) -> &GeoCoordinate {
        &self.origin
    }
    pub fn destination(&self) -> &GeoCoordinate {
        &self.destination
    }
    pub fn unit(&self) -> Option<DistanceUnit> {
        self.unit
    }
}
