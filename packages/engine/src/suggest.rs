//! Search suggestion provider.
//!
//! Suggestions are a bounded prefix of the already-filtered visible set,
//! not a second index: the filter engine has constrained the set by the
//! same search text, so the first few visible records are exactly the
//! autocomplete candidates.

use farm_map_farm_models::GeoRecord;

/// Suggestion count shown under the search box by default.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Returns up to `limit` suggestions from the visible set, in visible-set
/// order. With empty `search_text` there is nothing to complete and the
/// result is empty.
#[must_use]
pub fn suggest<'a>(
    visible: impl IntoIterator<Item = &'a GeoRecord>,
    search_text: &str,
    limit: usize,
) -> Vec<&'a GeoRecord> {
    if search_text.is_empty() {
        return Vec::new();
    }
    visible.into_iter().take(limit).collect()
}
