use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::Validate;

use crate::distance::{
    domain::{
        model::{
            enums::distance_domain_error::DistanceDomainError,
            queries::calculate_distance_query::{
                CalculateDistanceQuery, CalculateDistanceQueryParts,
            },
        },
        services::distance_calculation_service::DistanceCalculationService,
    },
    interfaces::rest::resources::{
        calculate_distance_request_resource::{
            CalculateDistanceRequestResource, CalculateDistanceResponseResource,
        },
        distance_error_response_resource::DistanceErrorResponseResource,
    },
};

#[derive(Clone)]
pub struct DistanceRestControllerState {
    pub distance_calculation_service: Arc<dyn DistanceCalculationService>,
}

pub fn router(state: DistanceRestControllerState) -> Router {
    Router::new()
        .route("/distance/calculations", post(calculate_distance))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/distance/calculations",
    tag = "distance",
    request_body = CalculateDistanceRequestResource,
    responses(
        (status = 200, description = "Computed distance", body = CalculateDistanceResponseResource),
        (status = 400, description = "Invalid request", body = DistanceErrorResponseResource)
    )
)]
pub async fn calculate_distance(
    State(state): State<DistanceRestControllerState>,
    Json(request): Json<CalculateDistanceRequestResource>,
) -> Result<Json<CalculateDistanceResponseResource>, (StatusCode, Json<DistanceErrorResponseResource>)>
{
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(DistanceErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let query = CalculateDistanceQuery::new(CalculateDistanceQueryParts {
        origin_latitude: request.origin_latitude,
        origin_longitude: request.origin_longitude,
        destination_latitude: request.destination_latitude,
        destination_longitude: request.destination_longitude,
        unit: request.unit,
    })
    .map_err(map_domain_error)?;

    let measurement = state
        .distance_calculation_service
        .handle_calculate_distance(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CalculateDistanceResponseResource {
        distance: measurement.value,
        unit: measurement.unit.as_str().to_string(),
    }))
}

fn map_domain_error(
    error: DistanceDomainError,
) -> (StatusCode, Json<DistanceErrorResponseResource>) {
    let status = match error {
        DistanceDomainError::InvalidCoordinate | DistanceDomainError::InvalidDistanceUnit => {
            StatusCode::BAD_REQUEST
        }
    };

    (
        status,
        Json(DistanceErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
