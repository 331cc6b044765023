pub mod app_state;
pub mod nextrip_records;
pub mod serde_helpers;
