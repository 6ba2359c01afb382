use fieldops_axum_api::distance::domain::model::queries::calculate_distance_query::{
    CalculateDistanceQuery, CalculateDistanceQueryParts,
};

// Coordenadas de prueba consistentes
pub const LIMA_LATITUDE: f64 = -12.0464;
pub const LIMA_LONGITUDE: f64 = -77.0428;
pub const CUSCO_LATITUDE: f64 = -13.5320;
pub const CUSCO_LONGITUDE: f64 = -71.9675;

pub fn lima_cusco_query() -> CalculateDistanceQuery {
    CalculateDistanceQuery::new(CalculateDistanceQueryParts {
        origin_latitude: LIMA_LATITUDE,
        origin_longitude: LIMA_LONGITUDE,
        destination_latitude: CUSCO_LATITUDE,
        destination_longitude: CUSCO_LONGITUDE,
        unit: None,
    })
    .expect("valid lima-cusco query")
}

pub fn lima_cusco_query_with_unit(unit: &str) -> CalculateDistanceQuery {
    CalculateDistanceQuery::new(CalculateDistanceQueryParts {
        origin_latitude: LIMA_LATITUDE,
        origin_longitude: LIMA_LONGITUDE,
        destination_latitude: CUSCO_LATITUDE,
        destination_longitude: CUSCO_LONGITUDE,
        unit: Some(unit.to_string()),
    })
    .expect("valid lima-cusco query with unit")
}

pub fn equator_degree_query() -> CalculateDistanceQuery {
    CalculateDistanceQuery::new(CalculateDistanceQueryParts {
        origin_latitude: 0.0,
        origin_longitude: 0.0,
        destination_latitude: 0.0,
        destination_longitude: 1.0,
        unit: None,
    })
    .expect("valid equator degree query")
}

pub fn same_point_query() -> CalculateDistanceQuery {
    CalculateDistanceQuery::new(CalculateDistanceQueryParts {
        origin_latitude: LIMA_LATITUDE,
        origin_longitude: LIMA_LONGITUDE,
        destination_latitude: LIMA_LATITUDE,
        destination_longitude: LIMA_LONGITUDE,
        unit: None,
    })
    .expect("valid same point query")
}
