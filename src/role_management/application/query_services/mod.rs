pub mod role_management_query_service_impl;
