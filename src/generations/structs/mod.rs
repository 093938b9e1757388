pub mod upstream_error_response;
