#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Deterministic mock farm dataset generation for tests and demos.
//!
//! Produces synthetic farm records with coordinates sampled uniformly
//! inside a configurable region, category and health status drawn from
//! weighted discrete distributions, and herd sizes from a bounded range.
//! Generation is driven by an explicit seed so the same inputs always
//! produce the same dataset.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use farm_map_farm_models::{GeoPoint, GeoRecord, HealthStatus, LivestockCategory};
use farm_map_geography::BoundingBox;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Check dates are backdated up to this many days from the anchor.
const CHECK_BACKDATE_DAYS: u64 = 30;

/// Default anchor for generated check dates. A fixed date keeps the
/// output byte-stable across runs, unlike "today".
const DEFAULT_CHECK_ANCHOR: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 1) {
    Some(date) => date,
    None => panic!("valid anchor date"),
};

/// Errors raised by an unusable generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GenerateError {
    /// A weight table is empty or sums to zero.
    #[error("weight table for {what} is empty or sums to zero")]
    InvalidWeights {
        /// Which table ("category" or "health status").
        what: &'static str,
    },

    /// The sampling region has no area.
    #[error("degenerate sampling region: lat {lat_min}..{lat_max}, lng {lng_min}..{lng_max}")]
    DegenerateRegion {
        /// Southern edge.
        lat_min: f64,
        /// Northern edge.
        lat_max: f64,
        /// Western edge.
        lng_min: f64,
        /// Eastern edge.
        lng_max: f64,
    },

    /// The herd size range is empty (start greater than end).
    #[error("empty herd size range: {start}..={end}")]
    EmptyHerdSizeRange {
        /// Range start.
        start: u32,
        /// Range end.
        end: u32,
    },
}

/// Configuration for the mock dataset generator.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Region to sample coordinates from, uniformly.
    pub region: BoundingBox,
    /// Inclusive herd size range.
    pub herd_size: RangeInclusive<u32>,
    /// Discrete category distribution as (variant, weight) pairs.
    pub category_weights: Vec<(LivestockCategory, u32)>,
    /// Discrete health status distribution as (variant, weight) pairs.
    pub status_weights: Vec<(HealthStatus, u32)>,
    /// Anchor date; checks fall 0..30 days before it.
    pub last_check_anchor: NaiveDate,
}

impl Default for MockConfig {
    /// Matches the demo dataset: the subcontinent region, herds of
    /// 10..=509 head, the four original categories uniformly, and
    /// statuses weighted three-to-one toward healthy.
    fn default() -> Self {
        Self {
            region: BoundingBox::demo_region(),
            herd_size: 10..=509,
            category_weights: vec![
                (LivestockCategory::Cattle, 1),
                (LivestockCategory::Buffalo, 1),
                (LivestockCategory::Goat, 1),
                (LivestockCategory::Poultry, 1),
            ],
            status_weights: vec![
                (HealthStatus::Healthy, 3),
                (HealthStatus::Observation, 1),
                (HealthStatus::Critical, 1),
            ],
            last_check_anchor: DEFAULT_CHECK_ANCHOR,
        }
    }
}

impl MockConfig {
    /// Generates `count` records, deterministically for a fixed seed.
    ///
    /// Record ids run `FM-1000` upward and names follow the
    /// `VitalFarm <letter>-<index>` scheme of the demo dataset.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the region, herd size range, or a
    /// weight table cannot be sampled from.
    pub fn generate(&self, count: usize, seed: u64) -> Result<Vec<GeoRecord>, GenerateError> {
        self.validate()?;

        let category_index = weighted_index(&self.category_weights, "category")?;
        let status_index = weighted_index(&self.status_weights, "health status")?;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = Vec::with_capacity(count);
        for i in 0..count {
            let lat = rng.random_range(self.region.lat_min..self.region.lat_max);
            let lng = rng.random_range(self.region.lng_min..self.region.lng_max);
            let category = self.category_weights[category_index.sample(&mut rng)].0;
            let health_status = self.status_weights[status_index.sample(&mut rng)].0;
            let herd_size = rng.random_range(self.herd_size.clone());
            let backdate = rng.random_range(0..CHECK_BACKDATE_DAYS);
            let last_check_date = self
                .last_check_anchor
                .checked_sub_days(Days::new(backdate))
                .unwrap_or(self.last_check_anchor);

            records.push(GeoRecord {
                id: format!("FM-{}", 1000 + i),
                name: format!("VitalFarm {}-{i}", letter_for(i)),
                location: GeoPoint::new(lat, lng),
                category,
                herd_size,
                health_status,
                last_check_date,
                contact: None,
            });
        }

        log::debug!("Generated {count} mock farm records (seed {seed})");
        Ok(records)
    }

    fn validate(&self) -> Result<(), GenerateError> {
        if self.region.lat_min >= self.region.lat_max || self.region.lng_min >= self.region.lng_max
        {
            return Err(GenerateError::DegenerateRegion {
                lat_min: self.region.lat_min,
                lat_max: self.region.lat_max,
                lng_min: self.region.lng_min,
                lng_max: self.region.lng_max,
            });
        }
        if self.herd_size.is_empty() {
            return Err(GenerateError::EmptyHerdSizeRange {
                start: *self.herd_size.start(),
                end: *self.herd_size.end(),
            });
        }
        Ok(())
    }
}

/// Generates `count` records with the default configuration.
///
/// # Errors
///
/// Returns [`GenerateError`] only if the default configuration is ever
/// made unsamplable, which would be a bug.
pub fn generate(count: usize, seed: u64) -> Result<Vec<GeoRecord>, GenerateError> {
    MockConfig::default().generate(count, seed)
}

fn weighted_index<T>(
    weights: &[(T, u32)],
    what: &'static str,
) -> Result<WeightedIndex<u32>, GenerateError> {
    WeightedIndex::new(weights.iter().map(|(_, weight)| *weight))
        .map_err(|_| GenerateError::InvalidWeights { what })
}

#[allow(clippy::cast_possible_truncation)]
const fn letter_for(i: usize) -> char {
    (b'A' + (i % 26) as u8) as char
}
