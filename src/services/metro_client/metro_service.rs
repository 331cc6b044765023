use std::time::Duration;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;
use urlencoding::encode;

use super::{record_decoder::decode_records, types::metro_service_error::MetroServiceError};
use crate::types::nextrip_records::{Departure, Route, TextValuePair, VehicleLocation};

#[derive(Clone)]
pub struct MetroServiceConfig {
    pub host: String,
    pub timeout: Duration,
}

/// Client for the NexTrip JSON API. Cloning shares the connection pool.
#[derive(Clone)]
pub struct MetroService {
    config: MetroServiceConfig,
    client: reqwest::Client,
}

impl MetroService {
    pub fn new(config: MetroServiceConfig) -> Result<Self, MetroServiceError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    /// Area transit providers. Routes reference them by `providerId`.
    pub async fn list_providers(&self) -> Result<Vec<TextValuePair>, MetroServiceError> {
        self.fetch_list("/nextrip/providers").await
    }

    /// Routes in service today.
    pub async fn list_routes(&self) -> Result<Vec<Route>, MetroServiceError> {
        self.fetch_list("/NexTrip/Routes").await
    }

    /// The two directions valid for a route (1 = South, 2 = East, 3 = West, 4 = North).
    pub async fn list_directions(
        &self,
        route: u32,
    ) -> Result<Vec<TextValuePair>, MetroServiceError> {
        self.fetch_list(&format!("/NexTrip/Directions/{}", route)).await
    }

    /// Timepoint stops for a route and direction.
    pub async fn list_stops(
        &self,
        route: u32,
        direction: u32,
    ) -> Result<Vec<TextValuePair>, MetroServiceError> {
        self.fetch_list(&format!("/NexTrip/Stops/{}/{}", route, direction)).await
    }

    pub async fn list_departures(&self, stop: u32) -> Result<Vec<Departure>, MetroServiceError> {
        let body = self.fetch(&format!("/NexTrip/{}", stop)).await?;
        decode_records(&body)
    }

    pub async fn list_timepoint_departures(
        &self,
        route: u32,
        direction: u32,
        stop: &str,
    ) -> Result<Vec<Departure>, MetroServiceError> {
        let body = self
            .fetch(&format!("/NexTrip/{}/{}/{}", route, direction, encode(stop)))
            .await?;
        decode_records(&body)
    }

    /// Vehicles that reported a location in the last few minutes. Route `0`
    /// returns every vehicle in service.
    pub async fn list_vehicle_locations(
        &self,
        route: u32,
    ) -> Result<Vec<VehicleLocation>, MetroServiceError> {
        let body = self
            .fetch(&format!("/NexTrip/VehicleLocations/{}", route))
            .await?;
        decode_records(&body)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, MetroServiceError> {
        let body = self.fetch(path).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch(&self, path: &str) -> Result<Bytes, MetroServiceError> {
        let url = format!("{}{}?format=json", self.config.host, path);
        debug!("Requesting {}", url);

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MetroServiceError::Upstream { status, url });
        }

        Ok(resp.bytes().await?)
    }
}
