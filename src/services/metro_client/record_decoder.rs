use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{embedded_date::parse_embedded_date, types::metro_service_error::MetroServiceError};

/// A record whose timestamp arrives as a raw `Date(...)` string under a field
/// the structural decode skips.
pub trait TimestampedRecord: DeserializeOwned {
    const RAW_TIMESTAMP_FIELD: &'static str;

    fn set_timestamp(&mut self, timestamp: DateTime<Utc>);
}

/// Decodes one record: declared fields first, then the raw timestamp field.
pub fn decode_record<T: TimestampedRecord>(value: Value) -> Result<T, MetroServiceError> {
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(MetroServiceError::InvalidRecord(format!(
                "expected a JSON object, got {other}"
            )))
        }
    };

    let raw_timestamp = fields
        .get(T::RAW_TIMESTAMP_FIELD)
        .and_then(Value::as_str)
        .map(str::to_owned);

    let mut record: T = serde_json::from_value(Value::Object(fields))
        .map_err(|e| MetroServiceError::InvalidRecord(e.to_string()))?;

    let raw_timestamp = raw_timestamp.ok_or_else(|| {
        MetroServiceError::MalformedTimestamp(format!(
            "missing string field {}",
            T::RAW_TIMESTAMP_FIELD
        ))
    })?;
    record.set_timestamp(parse_embedded_date(&raw_timestamp)?);

    Ok(record)
}

/// Decodes a JSON array body, failing on the first bad record.
pub fn decode_records<T: TimestampedRecord>(body: &[u8]) -> Result<Vec<T>, MetroServiceError> {
    serde_json::from_slice::<Vec<Value>>(body)?
        .into_iter()
        .map(decode_record)
        .collect()
}
