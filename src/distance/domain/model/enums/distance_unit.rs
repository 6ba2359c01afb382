use crate::distance::domain::model::enums::distance_domain_error::DistanceDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DistanceUnit {
    Kilometers,
    Meters,
    Miles,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kilometers => "kilometers",
            Self::Meters => "meters",
            Self::Miles => "miles",
        }
    }

    pub fn factor_from_kilometers(&self) -> f64 {
        match self {
            Self::Kilometers => 1.0,
            Self::Meters => 1_000.0,
            Self::Miles => 1.0 / 1.609_344,
        }
    }

    pub fn parse(value: &str) -> Result<Self, DistanceDomainError> {
        match value.trim() {
            "kilometers" | "km" => Ok(Self::Kilometers),
            "meters" | "m" => Ok(Self::Meters),
            "miles" | "mi" => Ok(Self::Miles),
            _ => Err(DistanceDomainError::InvalidDistanceUnit),
        }
    }
}
