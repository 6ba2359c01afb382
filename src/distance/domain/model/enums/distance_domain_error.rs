use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistanceDomainError {
    #[error("coordinate is invalid")]
    InvalidCoordinate,

    #[error("distance unit is invalid")]
    InvalidDistanceUnit,
}
