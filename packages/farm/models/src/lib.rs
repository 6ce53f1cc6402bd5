#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Farm record types and livestock taxonomy definitions.
//!
//! This crate defines the canonical farm location record and the closed
//! livestock/health enumerations used across the entire farm-map system.
//! All data sources normalize their features into these shared types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Livestock type kept at a farm location.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LivestockCategory {
    /// Dairy and beef cattle
    Cattle,
    /// Water buffalo
    Buffalo,
    /// Goats
    Goat,
    /// Chickens, ducks, and other poultry
    Poultry,
    /// Sheep
    Sheep,
    /// Pigs
    Pig,
}

impl LivestockCategory {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Cattle,
            Self::Buffalo,
            Self::Goat,
            Self::Poultry,
            Self::Sheep,
            Self::Pig,
        ]
    }
}

/// Veterinary health status of a herd, from routine to urgent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    /// No issues found at the last check
    Healthy,
    /// Under observation after an irregular finding
    Observation,
    /// Active health incident requiring intervention
    Critical,
}

impl HealthStatus {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Healthy, Self::Observation, Self::Critical]
    }
}

/// A geographic point in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude in degrees, in `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, in `[-180, 180]`.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both coordinates are finite and within WGS84 range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One geo-tagged farm location record.
///
/// Records are immutable once constructed: the store that holds them is
/// replace-only, and `id` identifies the record for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRecord {
    /// Unique record identifier (e.g. "FM-1042").
    pub id: String,
    /// Display name; uniqueness is not enforced.
    pub name: String,
    /// Geographic location of the farm.
    pub location: GeoPoint,
    /// Livestock type kept at this location.
    pub category: LivestockCategory,
    /// Number of animals in the herd.
    pub herd_size: u32,
    /// Health status from the most recent check.
    pub health_status: HealthStatus,
    /// Date of the most recent veterinary check. Display-only.
    pub last_check_date: NaiveDate,
    /// Contact phone or address for the farm operator, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_string_roundtrip() {
        for category in LivestockCategory::all() {
            let s = category.to_string();
            let parsed: LivestockCategory = s.parse().unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn status_serializes_screaming_snake() {
        let json = serde_json::to_string(&HealthStatus::Observation).unwrap();
        assert_eq!(json, "\"OBSERVATION\"");
    }

    #[test]
    fn point_validity_bounds() {
        assert!(GeoPoint::new(20.0, 78.0).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn record_serde_camel_case() {
        let record = GeoRecord {
            id: "FM-1000".into(),
            name: "VitalFarm A-0".into(),
            location: GeoPoint::new(20.0, 78.0),
            category: LivestockCategory::Cattle,
            herd_size: 120,
            health_status: HealthStatus::Healthy,
            last_check_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            contact: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["herdSize"], 120);
        assert_eq!(json["healthStatus"], "HEALTHY");
        assert_eq!(json["lastCheckDate"], "2026-01-15");
        assert!(json.get("contact").is_none());
    }
}
