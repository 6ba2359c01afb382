pub mod known_role_name;
pub mod role_management_domain_error;
