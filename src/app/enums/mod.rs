pub mod api_status;
