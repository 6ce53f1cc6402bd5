#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! `GeoJSON` feature-collection adapter for farm records.
//!
//! The external data loader hands the engine a `GeoJSON`
//! `FeatureCollection` whose features carry Point geometry and a
//! properties bag (`id`, `name`, `type`, `herdSize`, `healthStatus`,
//! `lastCheck`, optional `contact`). This crate converts that shape into
//! [`GeoRecord`]s and back. A malformed document is an error; an
//! individual malformed feature is logged and skipped so one bad row
//! never sinks a whole dataset.

use chrono::NaiveDate;
use farm_map_farm_models::{GeoPoint, GeoRecord, HealthStatus, LivestockCategory};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use thiserror::Error;

/// Errors that can occur while reading or writing feature collections.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The document is not valid `GeoJSON`.
    #[error("GeoJSON parse error: {0}")]
    Geojson(#[from] geojson::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but is not a `FeatureCollection`.
    #[error("expected a FeatureCollection, got {got}")]
    NotAFeatureCollection {
        /// The `GeoJSON` object type found instead.
        got: &'static str,
    },
}

/// Parses a `GeoJSON` `FeatureCollection` document into farm records.
///
/// Features with non-point geometry, missing or malformed required
/// properties, or out-of-range coordinates are skipped with a warning.
///
/// # Errors
///
/// Returns [`IngestError`] if the document itself cannot be parsed or is
/// not a `FeatureCollection`.
pub fn records_from_geojson(document: &str) -> Result<Vec<GeoRecord>, IngestError> {
    let geojson: GeoJson = document.parse()?;
    let collection = match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        GeoJson::Feature(_) => {
            return Err(IngestError::NotAFeatureCollection { got: "Feature" });
        }
        GeoJson::Geometry(_) => {
            return Err(IngestError::NotAFeatureCollection { got: "Geometry" });
        }
    };

    let total = collection.features.len();
    let mut records = Vec::with_capacity(total);
    for (position, feature) in collection.features.into_iter().enumerate() {
        match record_from_feature(feature) {
            Ok(record) => records.push(record),
            Err(reason) => {
                log::warn!("Skipping feature {position}: {reason}");
            }
        }
    }
    log::info!("Loaded {} of {total} features as farm records", records.len());

    Ok(records)
}

/// Serializes farm records back into a `GeoJSON` `FeatureCollection`
/// document, the same shape [`records_from_geojson`] reads.
///
/// # Errors
///
/// Returns [`IngestError::Json`] if serialization fails.
pub fn records_to_geojson(records: &[GeoRecord]) -> Result<String, IngestError> {
    let features = records.iter().map(feature_from_record).collect();
    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    Ok(serde_json::to_string(&GeoJson::from(collection))?)
}

/// Converts one feature, or explains why it cannot be a record.
fn record_from_feature(feature: Feature) -> Result<GeoRecord, String> {
    let geometry = feature.geometry.ok_or("missing geometry")?;
    let coordinates = match geometry.value {
        Value::Point(coordinates) => coordinates,
        other => return Err(format!("expected Point geometry, got {}", other.type_name())),
    };
    let [lng, lat] = coordinates[..] else {
        return Err(format!("expected 2 coordinates, got {}", coordinates.len()));
    };
    let location = GeoPoint::new(lat, lng);
    if !location.is_valid() {
        return Err(format!("coordinates out of range: lat {lat}, lng {lng}"));
    }

    let properties = feature.properties.ok_or("missing properties")?;

    let id = required_string(&properties, "id")?;
    let name = required_string(&properties, "name")?;
    let category = parse_enum::<LivestockCategory>(&properties, "type")?;
    let health_status = parse_enum::<HealthStatus>(&properties, "healthStatus")?;
    let herd_size = properties
        .get("herdSize")
        .and_then(serde_json::Value::as_u64)
        .ok_or("missing or non-integer herdSize")?;
    let herd_size = u32::try_from(herd_size).map_err(|_| format!("herdSize {herd_size} too large"))?;
    let last_check_date = parse_check_date(&required_string(&properties, "lastCheck")?)?;
    let contact = properties
        .get("contact")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned);

    Ok(GeoRecord {
        id,
        name,
        location,
        category,
        herd_size,
        health_status,
        last_check_date,
        contact,
    })
}

fn feature_from_record(record: &GeoRecord) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("id".into(), record.id.clone().into());
    properties.insert("name".into(), record.name.clone().into());
    properties.insert("type".into(), record.category.to_string().into());
    properties.insert("herdSize".into(), record.herd_size.into());
    properties.insert("healthStatus".into(), record.health_status.to_string().into());
    properties.insert(
        "lastCheck".into(),
        record.last_check_date.format("%Y-%m-%d").to_string().into(),
    );
    if let Some(contact) = &record.contact {
        properties.insert("contact".into(), contact.clone().into());
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            record.location.lng,
            record.location.lat,
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn required_string(properties: &JsonObject, key: &str) -> Result<String, String> {
    properties
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| format!("missing or non-string {key}"))
}

/// Parses a strum-backed enum property, accepting any case
/// ("Cattle", "CATTLE", "cattle").
fn parse_enum<T: std::str::FromStr>(properties: &JsonObject, key: &str) -> Result<T, String> {
    let raw = required_string(properties, key)?;
    raw.to_uppercase()
        .parse()
        .map_err(|_| format!("unknown {key} value {raw:?}"))
}

/// Parses a check date, ISO first with a US-locale fallback (older
/// exports used `toLocaleDateString`).
fn parse_check_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .map_err(|_| format!("unparseable lastCheck date {raw:?}"))
}
