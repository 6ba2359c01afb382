#[path = "support/fakes.rs"]
mod fakes;
#[path = "support/fixtures.rs"]
pub mod fixtures;

pub use fixtures::{
    USER_1_ID, USER_2_ID, assign_role_command, assign_role_command_with_role, list_roles_query,
};
pub use harness::{create_command_harness, create_query_harness};
