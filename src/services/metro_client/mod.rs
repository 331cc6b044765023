pub mod embedded_date;
pub mod metro_service;
pub mod record_decoder;
pub mod types;
