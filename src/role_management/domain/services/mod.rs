pub mod role_management_command_service;
pub mod role_management_query_service;
