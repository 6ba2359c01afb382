#[path = "support/fixtures.rs"]
pub mod fixtures;
#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{
    equator_degree_query, lima_cusco_query, lima_cusco_query_with_unit, same_point_query,
};
pub use harness::{create_distance_harness, create_distance_harness_with};
