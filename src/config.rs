//! Imputer configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ImputeError, Result};

/// Maximum H3 resolution.
const MAX_RESOLUTION: u8 = 15;

/// Top-level imputer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImputerConfig {
    /// Hexagonal grid resolution (higher is finer).
    pub resolution: u8,
    /// Grid distance at or above which a transition is not trusted as an edge.
    pub max_gap: u32,
    /// Object ids left out of aggregation.
    pub excluded: Vec<String>,
    /// Column names of the raw observation table.
    pub schema: Schema,
}

impl Default for ImputerConfig {
    fn default() -> Self {
        Self {
            resolution: 9,
            max_gap: 25,
            excluded: Vec::new(),
            schema: Schema::default(),
        }
    }
}

impl ImputerConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ImputeError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ImputeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to TOML text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ImputeError::Config(e.to_string()))
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.resolution > MAX_RESOLUTION {
            return Err(ImputeError::Config(format!(
                "resolution must be in [0, {MAX_RESOLUTION}], got {}", self.resolution
            )));
        }
        if self.max_gap == 0 {
            return Err(ImputeError::Config("max_gap must be at least 1".into()));
        }
        Ok(())
    }
}

/// Mapping from logical observation fields to raw column names.
///
/// All fields except `trip` are required and carry the AIS defaults.
/// `trip` is optional; without it trips are identified by the object id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Object identifier column.
    #[serde(default = "default_id")]
    pub id: String,
    /// Longitude column (degrees).
    #[serde(default = "default_lon")]
    pub lon: String,
    /// Latitude column (degrees).
    #[serde(default = "default_lat")]
    pub lat: String,
    /// Timestamp column (epoch seconds or date-time text).
    #[serde(default = "default_t")]
    pub t: String,
    /// Speed over ground column.
    #[serde(default = "default_sog")]
    pub sog: String,
    /// Course over ground column.
    #[serde(default = "default_cog")]
    pub cog: String,
    /// Trip identifier column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip: Option<String>,
}

fn default_id() -> String { "MMSI".into() }
fn default_lon() -> String { "LON".into() }
fn default_lat() -> String { "LAT".into() }
fn default_t() -> String { "TIMESTAMP".into() }
fn default_sog() -> String { "SPEED".into() }
fn default_cog() -> String { "COURSE".into() }

impl Default for Schema {
    fn default() -> Self {
        Self {
            id: default_id(),
            lon: default_lon(),
            lat: default_lat(),
            t: default_t(),
            sog: default_sog(),
            cog: default_cog(),
            trip: Some("TRIP".into()),
        }
    }
}

impl Schema {
    /// Column used to count distinct trips, falling back to the id column.
    #[inline] pub fn trip_column(&self) -> &str { self.trip.as_deref().unwrap_or(&self.id) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_ais_layout() {
        let config = ImputerConfig::default();
        assert_eq!(config.resolution, 9);
        assert_eq!(config.max_gap, 25);
        assert_eq!(config.schema.id, "MMSI");
        assert_eq!(config.schema.trip_column(), "TRIP");
        assert!(config.excluded.is_empty());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        assert_eq!(ImputerConfig::from_toml_str("").unwrap(), ImputerConfig::default());
    }

    #[test]
    fn schema_without_trip_falls_back_to_id() {
        let config = ImputerConfig::from_toml_str(r#"
            resolution = 8
            excluded = ["237000000"]

            [schema]
            id = "vessel"
            t = "ts"
        "#).unwrap();

        assert_eq!(config.resolution, 8);
        assert_eq!(config.max_gap, 25);
        assert_eq!(config.schema.id, "vessel");
        assert_eq!(config.schema.t, "ts");
        assert_eq!(config.schema.lon, "LON");
        assert_eq!(config.schema.trip, None);
        assert_eq!(config.schema.trip_column(), "vessel");
        assert_eq!(config.excluded, vec!["237000000".to_string()]);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(ImputerConfig::from_toml_str("resolution = 16"), Err(ImputeError::Config(_))));
        assert!(matches!(ImputerConfig::from_toml_str("max_gap = 0"), Err(ImputeError::Config(_))));
        assert!(matches!(ImputerConfig::from_toml_str("resolution = \"nine\""), Err(ImputeError::Config(_))));
    }

    #[test]
    fn toml_round_trip_preserves_schema() {
        let config = ImputerConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(ImputerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ImputerConfig::load(Path::new("/nonexistent/habit.toml")).unwrap_err();
        assert!(matches!(err, ImputeError::Config(_)));
    }
}
