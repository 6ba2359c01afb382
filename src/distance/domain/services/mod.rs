pub mod distance_calculation_service;
