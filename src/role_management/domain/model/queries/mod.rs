pub mod list_user_roles_query;
