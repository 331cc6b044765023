pub mod metro_service_error;
