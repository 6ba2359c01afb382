pub mod role_management_command_service_impl;
