use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::null_as_default;
use crate::services::metro_client::record_decoder::TimestampedRecord;

// Upstream NexTrip payloads use PascalCase keys and omit or null out empty
// fields. Records go back out camelCase.

/// Label/id pair returned for providers, directions and stops.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "PascalCase"))]
pub struct TextValuePair {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "PascalCase"))]
pub struct Route {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename(deserialize = "ProviderID"), deserialize_with = "null_as_default")]
    pub provider_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub route: String,
}

/// A scheduled or timepoint departure.
///
/// `departure_timestamp` is filled in from the raw `DepartureTime` field after
/// the structural decode, see [`TimestampedRecord`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "PascalCase"))]
pub struct Departure {
    #[serde(deserialize_with = "null_as_default")]
    pub actual: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub block_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub departure_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gate: String,
    #[serde(deserialize_with = "null_as_default")]
    pub route: String,
    #[serde(deserialize_with = "null_as_default")]
    pub route_direction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub terminal: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vehicle_heading: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub vehicle_latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub vehicle_longitude: f64,
    #[serde(skip_deserializing)]
    pub departure_timestamp: Option<DateTime<Utc>>,
}

impl TimestampedRecord for Departure {
    const RAW_TIMESTAMP_FIELD: &'static str = "DepartureTime";

    fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.departure_timestamp = Some(timestamp);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "PascalCase"))]
pub struct VehicleLocation {
    #[serde(deserialize_with = "null_as_default")]
    pub block_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub direction: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub route: String,
    #[serde(deserialize_with = "null_as_default")]
    pub terminal: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vehicle_latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub vehicle_longitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub bearing: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub odometer: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub speed: i64,
    #[serde(skip_deserializing)]
    pub last_checkin_timestamp: Option<DateTime<Utc>>,
}

impl TimestampedRecord for VehicleLocation {
    const RAW_TIMESTAMP_FIELD: &'static str = "LocationTime";

    fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.last_checkin_timestamp = Some(timestamp);
    }
}
