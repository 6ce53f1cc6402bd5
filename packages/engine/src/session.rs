//! Map session facade.
//!
//! Owns the store, the criteria, the cached visible set, and the
//! selection, and keeps them consistent: every criteria or dataset
//! mutation is applied as one unit and triggers exactly one
//! recomputation of the visible set, followed by selection invalidation.
//! Single-writer, single-reader within one UI session.

use farm_map_farm_models::{GeoRecord, HealthStatus, LivestockCategory};
use serde::{Deserialize, Serialize};

use crate::criteria::FilterCriteria;
use crate::selection::Selection;
use crate::store::FarmStore;
use crate::suggest::{self, DEFAULT_SUGGESTION_LIMIT};
use crate::{CriteriaError, filter};

/// Summary counters over the visible set, shown as stat cards under the
/// map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleStats {
    /// Number of visible farms.
    pub total_farms: u64,
    /// Visible farms currently marked [`HealthStatus::Critical`].
    pub critical_alerts: u64,
    /// Sum of herd sizes across the visible farms.
    pub total_headcount: u64,
}

/// One interactive map session over an immutable dataset.
#[derive(Debug, Clone)]
pub struct MapSession {
    store: FarmStore,
    criteria: FilterCriteria,
    selection: Selection,
    /// Store positions of records passing the current criteria, in
    /// insertion order. Recomputed on every mutation.
    visible: Vec<usize>,
    suggestion_limit: usize,
}

impl MapSession {
    /// Starts a session over a dataset with unconstrained criteria.
    #[must_use]
    pub fn new(store: FarmStore) -> Self {
        let mut session = Self {
            store,
            criteria: FilterCriteria::default(),
            selection: Selection::Idle,
            visible: Vec::new(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        };
        session.recompute();
        session
    }

    /// Overrides the suggestion cap (default
    /// [`DEFAULT_SUGGESTION_LIMIT`]).
    #[must_use]
    pub const fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Restricts the view to one livestock category, or `None` for all.
    pub fn set_category(&mut self, category: Option<LivestockCategory>) {
        self.criteria.category = category;
        self.recompute();
    }

    /// Restricts the view to one health status, or `None` for all.
    pub fn set_health_status(&mut self, status: Option<HealthStatus>) {
        self.criteria.health_status = status;
        self.recompute();
    }

    /// Sets the inclusive herd-size floor.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidMinHerdSize`] for a negative or
    /// out-of-range value; the view is left untouched in that case.
    pub fn set_min_herd_size(&mut self, value: i64) -> Result<(), CriteriaError> {
        self.criteria.set_min_herd_size(value)?;
        self.recompute();
        Ok(())
    }

    /// Sets the free-text query.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.recompute();
    }

    /// Replaces the whole dataset (the store is never mutated in place).
    /// The criteria survive; the selection is re-validated against the
    /// new visible set.
    pub fn replace_dataset(&mut self, store: FarmStore) {
        self.store = store;
        self.recompute();
    }

    /// Handles a marker click or suggestion pick.
    ///
    /// Selecting an id absent from the store is a no-op, not an error;
    /// re-selecting the active id re-affirms it without toggling closed.
    pub fn select(&mut self, id: &str) {
        if self.store.contains(id) {
            self.selection.activate(id);
        } else {
            log::debug!("Ignoring selection of unknown record id {id:?}");
        }
    }

    /// Closes the detail overlay.
    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    /// The visible records, in store insertion order.
    pub fn visible(&self) -> impl Iterator<Item = &GeoRecord> {
        self.visible
            .iter()
            .filter_map(|&position| self.store.record_at(position))
    }

    /// Number of visible records.
    #[must_use]
    pub const fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The current selection state.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected record, if the selection is active.
    #[must_use]
    pub fn selected_record(&self) -> Option<&GeoRecord> {
        self.selection.active_id().and_then(|id| self.store.get(id))
    }

    /// Autocomplete candidates: a bounded prefix of the visible set,
    /// empty unless search text is present.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&GeoRecord> {
        suggest::suggest(
            self.visible(),
            &self.criteria.search_text,
            self.suggestion_limit,
        )
    }

    /// The current criteria (read-only; mutate through the setters).
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &FarmStore {
        &self.store
    }

    /// Summary counters over the visible set.
    #[must_use]
    pub fn stats(&self) -> VisibleStats {
        let mut stats = VisibleStats {
            total_farms: 0,
            critical_alerts: 0,
            total_headcount: 0,
        };
        for record in self.visible() {
            stats.total_farms += 1;
            if record.health_status == HealthStatus::Critical {
                stats.critical_alerts += 1;
            }
            stats.total_headcount += u64::from(record.herd_size);
        }
        stats
    }

    /// Re-evaluates the visible set and drops a selection the new view
    /// excludes. Runs exactly once per mutation.
    fn recompute(&mut self) {
        self.visible = filter::evaluate_positions(&self.store, &self.criteria);
        log::debug!(
            "Recomputed visible set: {} of {} records",
            self.visible.len(),
            self.store.len()
        );
        let store = &self.store;
        let visible = &self.visible;
        self.selection.invalidate(|id| {
            visible
                .iter()
                .any(|&position| store.record_at(position).is_some_and(|r| r.id == id))
        });
    }
}
