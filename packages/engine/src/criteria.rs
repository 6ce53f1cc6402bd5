//! The current filter query state.

use farm_map_farm_models::{HealthStatus, LivestockCategory};
use serde::{Deserialize, Serialize};

use crate::CriteriaError;

/// The user-selected filter parameters for the map view.
///
/// A `None` in an optional field means "All" (no constraint on that
/// axis). The default criteria pass every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Restrict to one livestock category, or `None` for all.
    pub category: Option<LivestockCategory>,
    /// Inclusive lower bound on herd size.
    pub min_herd_size: u32,
    /// Restrict to one health status, or `None` for all.
    pub health_status: Option<HealthStatus>,
    /// Free-text query matched case-insensitively against record name
    /// and id. Empty means no text constraint.
    pub search_text: String,
}

impl FilterCriteria {
    /// Sets the minimum herd size from an untrusted (UI-supplied) value.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidMinHerdSize`] if `value` is
    /// negative or exceeds the herd-count range. The previous bound is
    /// kept unchanged on error, never clamped.
    pub fn set_min_herd_size(&mut self, value: i64) -> Result<(), CriteriaError> {
        self.min_herd_size =
            u32::try_from(value).map_err(|_| CriteriaError::InvalidMinHerdSize { value })?;
        Ok(())
    }

    /// Whether the text clause is active.
    #[must_use]
    pub fn has_search_text(&self) -> bool {
        !self.search_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_are_unconstrained() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.health_status, None);
        assert_eq!(criteria.min_herd_size, 0);
        assert!(!criteria.has_search_text());
    }

    #[test]
    fn rejects_negative_min_herd_size() {
        let mut criteria = FilterCriteria::default();
        criteria.set_min_herd_size(50).unwrap();
        let err = criteria.set_min_herd_size(-1).unwrap_err();
        assert_eq!(err, CriteriaError::InvalidMinHerdSize { value: -1 });
        // Previous bound survives the rejected update.
        assert_eq!(criteria.min_herd_size, 50);
    }

    #[test]
    fn rejects_min_herd_size_beyond_u32() {
        let mut criteria = FilterCriteria::default();
        assert!(criteria.set_min_herd_size(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn deserializes_partial_json() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"category":"GOAT","minHerdSize":25}"#).unwrap();
        assert_eq!(criteria.category, Some(LivestockCategory::Goat));
        assert_eq!(criteria.min_herd_size, 25);
        assert_eq!(criteria.health_status, None);
        assert_eq!(criteria.search_text, "");
    }
}
