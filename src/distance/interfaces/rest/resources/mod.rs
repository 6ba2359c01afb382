pub mod calculate_distance_request_resource;
pub mod distance_error_response_resource;
