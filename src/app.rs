use std::{env, num::ParseIntError, time::Duration};

use axum::{routing::get, Router};
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use validator::{Validate, ValidationErrors};

use crate::{
    routes::apply_routes,
    services::metro_client::{
        metro_service::{MetroService, MetroServiceConfig},
        types::metro_service_error::MetroServiceError,
    },
    types::app_state::AppState,
};

const DEFAULT_METRO_HOST: &str = "http://svc.metrotransit.org";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds: {source}")]
    InvalidNumber {
        var: &'static str,
        source: ParseIntError,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    #[validate(url(message = "METRO_HOST must be a URL"))]
    pub metro_host: String,
    #[validate(range(
        min = 1,
        max = 300,
        message = "METRO_TIMEOUT_SECS must be between 1 and 300"
    ))]
    pub request_timeout_secs: u64,
    #[validate(length(min = 1, message = "BIND_ADDR must not be empty"))]
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let request_timeout_secs = match lookup("METRO_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    var: "METRO_TIMEOUT_SECS",
                    source,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = AppConfig {
            metro_host: lookup("METRO_HOST")
                .map(|host| host.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_METRO_HOST.to_string()),
            request_timeout_secs,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        };
        config.validate()?;

        Ok(config)
    }

    #[cfg(test)]
    pub fn for_testing(metro_host: String) -> Self {
        AppConfig {
            metro_host,
            request_timeout_secs: 5,
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }
}

pub fn gen_app(config: AppConfig) -> Result<Router, MetroServiceError> {
    let state = AppState {
        metro_service: MetroService::new(MetroServiceConfig {
            host: config.metro_host,
            timeout: Duration::from_secs(config.request_timeout_secs),
        })?,
    };

    Ok(apply_routes(Router::new())
        .route("/", get(root))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn root() -> &'static str {
    "Hello world!\n"
}
