//! Composite filter predicate evaluation.
//!
//! The visible set is the subset of the store passing the logical AND of
//! four independent clauses (category, health status, herd-size floor,
//! free text), in store insertion order. Evaluation is pure: the same
//! store and criteria always produce a structurally identical sequence.

use farm_map_farm_models::GeoRecord;

use crate::criteria::FilterCriteria;
use crate::store::FarmStore;

/// Whether one record passes all active criteria clauses.
#[must_use]
pub fn matches(criteria: &FilterCriteria, record: &GeoRecord) -> bool {
    let matches_category = criteria
        .category
        .is_none_or(|category| record.category == category);
    let matches_status = criteria
        .health_status
        .is_none_or(|status| record.health_status == status);
    let matches_size = record.herd_size >= criteria.min_herd_size;
    let matches_search = !criteria.has_search_text()
        || contains_ignore_case(&record.name, &criteria.search_text)
        || contains_ignore_case(&record.id, &criteria.search_text);

    matches_category && matches_status && matches_size && matches_search
}

/// Evaluates the criteria over the store, returning the visible records
/// in insertion order (stable filter, no re-sort).
///
/// An empty store yields an empty sequence; there is no error path.
#[must_use]
pub fn evaluate<'a>(store: &'a FarmStore, criteria: &FilterCriteria) -> Vec<&'a GeoRecord> {
    store
        .iter()
        .filter(|record| matches(criteria, record))
        .collect()
}

/// Like [`evaluate`] but yields store positions instead of references,
/// for callers that cache the visible set alongside the store.
#[must_use]
pub fn evaluate_positions(store: &FarmStore, criteria: &FilterCriteria) -> Vec<usize> {
    store
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(criteria, record))
        .map(|(position, _)| position)
        .collect()
}

/// Case-insensitive substring containment.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use farm_map_farm_models::{GeoPoint, HealthStatus, LivestockCategory};

    use super::*;

    fn record(
        id: &str,
        name: &str,
        category: LivestockCategory,
        herd_size: u32,
        health_status: HealthStatus,
    ) -> GeoRecord {
        GeoRecord {
            id: id.into(),
            name: name.into(),
            location: GeoPoint::new(20.0, 78.0),
            category,
            herd_size,
            health_status,
            last_check_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            contact: None,
        }
    }

    fn three_farms() -> FarmStore {
        FarmStore::new(vec![
            record(
                "F1",
                "VitalFarm A-1",
                LivestockCategory::Cattle,
                50,
                HealthStatus::Healthy,
            ),
            record(
                "F2",
                "VitalFarm B-2",
                LivestockCategory::Goat,
                5,
                HealthStatus::Critical,
            ),
            record(
                "F3",
                "VitalFarm C-3",
                LivestockCategory::Cattle,
                200,
                HealthStatus::Observation,
            ),
        ])
    }

    #[test]
    fn default_criteria_pass_everything() {
        let store = three_farms();
        let visible = evaluate(&store, &FilterCriteria::default());
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn clauses_combine_with_and() {
        // Cattle with at least 100 head leaves only F3.
        let store = three_farms();
        let criteria = FilterCriteria {
            category: Some(LivestockCategory::Cattle),
            min_herd_size: 100,
            ..FilterCriteria::default()
        };
        let ids: Vec<&str> = evaluate(&store, &criteria)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["F3"]);
    }

    #[test]
    fn herd_size_bound_is_inclusive() {
        let store = three_farms();
        let criteria = FilterCriteria {
            min_herd_size: 200,
            ..FilterCriteria::default()
        };
        let visible = evaluate(&store, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "F3");
    }

    #[test]
    fn search_matches_name_and_id_case_insensitively() {
        let store = FarmStore::new(vec![record(
            "FM-1003",
            "VitalFarm A-3",
            LivestockCategory::Poultry,
            30,
            HealthStatus::Healthy,
        )]);

        for query in ["vitalfarm", "A-3", "a-3", "fm-1003"] {
            let criteria = FilterCriteria {
                search_text: query.into(),
                ..FilterCriteria::default()
            };
            assert_eq!(evaluate(&store, &criteria).len(), 1, "query {query:?}");
        }

        let criteria = FilterCriteria {
            search_text: "dairyco".into(),
            ..FilterCriteria::default()
        };
        assert!(evaluate(&store, &criteria).is_empty());
    }

    #[test]
    fn preserves_store_order() {
        let store = three_farms();
        let criteria = FilterCriteria {
            category: Some(LivestockCategory::Cattle),
            ..FilterCriteria::default()
        };
        let ids: Vec<&str> = evaluate(&store, &criteria)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["F1", "F3"]);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let store = three_farms();
        let criteria = FilterCriteria {
            health_status: Some(HealthStatus::Observation),
            search_text: "vital".into(),
            ..FilterCriteria::default()
        };
        let first = evaluate(&store, &criteria);
        let second = evaluate(&store, &criteria);
        assert_eq!(first, second);
        assert_eq!(
            evaluate_positions(&store, &criteria),
            evaluate_positions(&store, &criteria)
        );
    }

    #[test]
    fn tightening_any_clause_never_grows_the_set() {
        let store = three_farms();
        let base = FilterCriteria {
            search_text: "vital".into(),
            ..FilterCriteria::default()
        };
        let base_len = evaluate(&store, &base).len();

        let narrower_category = FilterCriteria {
            category: Some(LivestockCategory::Goat),
            ..base.clone()
        };
        assert!(evaluate(&store, &narrower_category).len() <= base_len);

        let narrower_status = FilterCriteria {
            health_status: Some(HealthStatus::Critical),
            ..base.clone()
        };
        assert!(evaluate(&store, &narrower_status).len() <= base_len);

        let higher_floor = FilterCriteria {
            min_herd_size: 60,
            ..base.clone()
        };
        assert!(evaluate(&store, &higher_floor).len() <= base_len);

        let longer_search = FilterCriteria {
            search_text: "vitalfarm a".into(),
            ..base
        };
        assert!(evaluate(&store, &longer_search).len() <= base_len);
    }

    #[test]
    fn empty_store_yields_empty_set() {
        let store = FarmStore::default();
        assert!(evaluate(&store, &FilterCriteria::default()).is_empty());
    }
}
