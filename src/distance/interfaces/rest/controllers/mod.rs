pub mod distance_rest_controller;
