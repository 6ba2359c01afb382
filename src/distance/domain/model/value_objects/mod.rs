pub mod geo_coordinate;
