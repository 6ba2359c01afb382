pub mod haversine_distance_calculation_service_impl;
