use ahash::AHashSet;
use chrono::{DateTime, NaiveDateTime};
use polars::prelude::{Column, DataFrame, DataType};
use tracing::{debug, warn};

use crate::{config::Schema, error::AggregationError};

/// Date-time layouts accepted for text timestamps (besides RFC 3339).
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
];

/// A single position report of a tracked object.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub id: String,
    pub trip: Option<String>,
    pub timestamp: f64, // Epoch seconds
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub speed: Option<f64>,
    pub course: Option<f64>,
}

/// Extract observations from a raw table using the configured column names.
/// Rows whose id is in `excluded`, or with a missing id or timestamp, are skipped.
pub fn read_observations(df: &DataFrame, schema: &Schema, excluded: &[String]) -> Result<Vec<Observation>, AggregationError> {
    let column = |name: &str| df.column(name)
        .map_err(|_| AggregationError::MissingColumn(name.to_string()));

    let ids = column(&schema.id)?.cast(&DataType::String)?;
    let trips = column(schema.trip_column())?.cast(&DataType::String)?;
    let lons = column(&schema.lon)?.cast(&DataType::Float64)?;
    let lats = column(&schema.lat)?.cast(&DataType::Float64)?;
    let speeds = column(&schema.sog)?.cast(&DataType::Float64)?;
    let courses = column(&schema.cog)?.cast(&DataType::Float64)?;
    let timestamps = parse_timestamps(column(&schema.t)?)?;

    let (ids, trips) = (ids.str()?, trips.str()?);
    let (lons, lats) = (lons.f64()?, lats.f64()?);
    let (speeds, courses) = (speeds.f64()?, courses.f64()?);

    let excluded = excluded.iter().map(String::as_str).collect::<AHashSet<_>>();
    let (mut skipped, mut dropped) = (0, 0);
    let mut observations = Vec::with_capacity(df.height());
    for (i, &timestamp) in timestamps.iter().enumerate() {
        let (Some(id), Some(timestamp)) = (ids.get(i), timestamp) else { skipped += 1; continue };
        if excluded.contains(id) { dropped += 1; continue }

        observations.push(Observation {
            id: id.to_string(),
            trip: trips.get(i).map(str::to_string),
            timestamp,
            lon: lons.get(i),
            lat: lats.get(i),
            speed: speeds.get(i),
            course: courses.get(i),
        });
    }

    if skipped > 0 {
        warn!("[aggregate] skipped {skipped} observations with a missing id or timestamp");
    }
    debug!("[aggregate] excluded {dropped} observations from {} listed ids", excluded.len());
    Ok(observations)
}

/// Convert a timestamp column to epoch seconds.
fn parse_timestamps(column: &Column) -> Result<Vec<Option<f64>>, AggregationError> {
    if column.dtype() == &DataType::String {
        return Ok(column.str()?.into_iter().map(|v| v.and_then(parse_timestamp)).collect());
    }
    let seconds = column.cast(&DataType::Float64)?;
    Ok(seconds.f64()?.into_iter().collect())
}

/// Parse a textual timestamp: plain epoch seconds, RFC 3339, or one of `TIMESTAMP_FORMATS` (as UTC).
fn parse_timestamp(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Ok(seconds) = text.parse::<f64>() { return Some(seconds) }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.timestamp_millis() as f64 / 1000.0);
    }
    TIMESTAMP_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|datetime| datetime.and_utc().timestamp_millis() as f64 / 1000.0)
}
