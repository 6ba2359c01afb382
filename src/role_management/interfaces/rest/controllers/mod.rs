pub mod role_management_rest_controller;
