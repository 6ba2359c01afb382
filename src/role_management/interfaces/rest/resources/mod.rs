pub mod assign_role_request_resource;
pub mod role_catalog_resource;
pub mod role_management_error_response_resource;
pub mod user_roles_resource;
