pub mod metro_client;
