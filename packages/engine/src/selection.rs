//! Single-active-selection state machine.
//!
//! At most one record is "active" at a time, driving the detail overlay.
//! The machine is deterministic with no timers: `Idle` and `Active(id)`
//! are the only states. Selection is id-based rather than
//! reference-based, so it survives dataset reloads.

use serde::{Deserialize, Serialize};

/// The detail-overlay selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "state", content = "id")]
pub enum Selection {
    /// No record selected; no overlay shown.
    #[default]
    Idle,
    /// One record selected, identified by its id.
    Active(String),
}

impl Selection {
    /// Whether a record is currently selected.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// The selected record id, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Active(id) => Some(id),
        }
    }

    /// Activates a selection for `id`.
    ///
    /// Re-selecting the already-active id is a no-op re-affirmation, not
    /// a toggle-close.
    pub fn activate(&mut self, id: impl Into<String>) {
        *self = Self::Active(id.into());
    }

    /// Clears the selection (explicit close).
    pub fn dismiss(&mut self) {
        *self = Self::Idle;
    }

    /// Drops the selection unless `still_visible` holds for the active
    /// id. Called after every filter or dataset change so the overlay
    /// never references a record the current view excludes.
    pub fn invalidate(&mut self, still_visible: impl FnOnce(&str) -> bool) {
        if let Self::Active(id) = self
            && !still_visible(id)
        {
            *self = Self::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let selection = Selection::default();
        assert!(!selection.is_active());
        assert_eq!(selection.active_id(), None);
    }

    #[test]
    fn activate_then_dismiss() {
        let mut selection = Selection::default();
        selection.activate("F1");
        assert_eq!(selection.active_id(), Some("F1"));
        selection.dismiss();
        assert_eq!(selection, Selection::Idle);
    }

    #[test]
    fn reselecting_same_id_stays_active() {
        let mut selection = Selection::default();
        selection.activate("F1");
        selection.activate("F1");
        assert_eq!(selection.active_id(), Some("F1"));
    }

    #[test]
    fn new_selection_replaces_old() {
        let mut selection = Selection::default();
        selection.activate("F1");
        selection.activate("F2");
        assert_eq!(selection.active_id(), Some("F2"));
    }

    #[test]
    fn invalidate_clears_only_excluded_ids() {
        let mut selection = Selection::default();
        selection.activate("F1");
        selection.invalidate(|id| id == "F1");
        assert!(selection.is_active());
        selection.invalidate(|id| id == "F2");
        assert_eq!(selection, Selection::Idle);
    }

    #[test]
    fn invalidate_on_idle_is_harmless() {
        let mut selection = Selection::Idle;
        selection.invalidate(|_| false);
        assert_eq!(selection, Selection::Idle);
    }
}
