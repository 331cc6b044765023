use crate::services::metro_client::metro_service::MetroService;

#[derive(Clone)]
pub struct AppState {
    pub metro_service: MetroService,
}
