//! Read-only store of farm records for one session.
//!
//! Holds the dataset in insertion order and keeps an id lookup table on
//! the side. The store is never mutated in place; a dataset change is a
//! whole-store replacement at the session level.

use std::collections::BTreeMap;

use farm_map_farm_models::GeoRecord;

/// The immutable record set backing a map session.
#[derive(Debug, Clone, Default)]
pub struct FarmStore {
    records: Vec<GeoRecord>,
    /// record id -> index into `records`
    index: BTreeMap<String, usize>,
}

impl FarmStore {
    /// Builds a store from records, preserving their order.
    ///
    /// Duplicate ids are kept in the iteration sequence, but the id
    /// lookup resolves to the last occurrence; the loader is responsible
    /// for id uniqueness.
    #[must_use]
    pub fn new(records: Vec<GeoRecord>) -> Self {
        let mut index = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            if let Some(previous) = index.insert(record.id.clone(), position) {
                log::warn!(
                    "Duplicate record id {:?} (positions {previous} and {position}); \
                     lookups resolve to the later record",
                    record.id
                );
            }
        }
        Self { records, index }
    }

    /// Number of records in the store.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, GeoRecord> {
        self.records.iter()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GeoRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// Whether a record with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The record at a given insertion position.
    #[must_use]
    pub fn record_at(&self, position: usize) -> Option<&GeoRecord> {
        self.records.get(position)
    }
}

impl From<Vec<GeoRecord>> for FarmStore {
    fn from(records: Vec<GeoRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a FarmStore {
    type Item = &'a GeoRecord;
    type IntoIter = std::slice::Iter<'a, GeoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
