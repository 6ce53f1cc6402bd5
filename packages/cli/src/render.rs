//! ASCII rendering of the projected visible set.
//!
//! The renderer owns clipping: the projector places out-of-box markers
//! outside the unit square and they are simply not drawn.

use std::fmt::Write as _;

use farm_map_engine::MapSession;
use farm_map_farm_models::{GeoRecord, HealthStatus};
use farm_map_geography::Projector;

/// Character grid dimensions for the map view.
const MAP_WIDTH: usize = 64;
const MAP_HEIGHT: usize = 24;

/// Marker glyph for a health status.
const fn marker(status: HealthStatus) -> char {
    match status {
        HealthStatus::Healthy => 'o',
        HealthStatus::Observation => '?',
        HealthStatus::Critical => '!',
    }
}

/// Renders the visible set as a bordered character grid, followed by the
/// summary stat lines.
#[must_use]
pub fn map_view(session: &MapSession, projector: &Projector) -> String {
    let mut grid = vec![vec![' '; MAP_WIDTH]; MAP_HEIGHT];
    let selected_id = session.selection().active_id();

    for record in session.visible() {
        let point = projector.project_point(record.location);
        if !(0.0..=1.0).contains(&point.x) || !(0.0..=1.0).contains(&point.y) {
            continue;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let column = ((point.x * (MAP_WIDTH - 1) as f64).round() as usize).min(MAP_WIDTH - 1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = ((point.y * (MAP_HEIGHT - 1) as f64).round() as usize).min(MAP_HEIGHT - 1);

        grid[row][column] = if selected_id == Some(record.id.as_str()) {
            '@'
        } else {
            marker(record.health_status)
        };
    }

    let mut out = String::new();
    let border: String = "-".repeat(MAP_WIDTH);
    let _ = writeln!(out, "+{border}+");
    for row in &grid {
        let line: String = row.iter().collect();
        let _ = writeln!(out, "|{line}|");
    }
    let _ = writeln!(out, "+{border}+");

    let stats = session.stats();
    let _ = writeln!(
        out,
        "farms: {}  critical: {}  headcount: {}",
        stats.total_farms, stats.critical_alerts, stats.total_headcount
    );
    let _ = writeln!(out, "legend: o healthy  ? observation  ! critical  @ selected");
    out
}

/// Renders the detail panel for the selected record.
#[must_use]
pub fn detail_panel(record: &GeoRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {} ({}) ---", record.name, record.id);
    let _ = writeln!(out, "category:   {}", record.category);
    let _ = writeln!(out, "status:     {}", record.health_status);
    let _ = writeln!(out, "herd size:  {}", record.herd_size);
    let _ = writeln!(out, "last check: {}", record.last_check_date);
    let _ = writeln!(
        out,
        "location:   {:.4}, {:.4}",
        record.location.lat, record.location.lng
    );
    if let Some(contact) = &record.contact {
        let _ = writeln!(out, "contact:    {contact}");
    }
    out
}

/// Renders the autocomplete candidates under the search box.
#[must_use]
pub fn suggestion_list(suggestions: &[&GeoRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "suggestions:");
    for record in suggestions {
        let _ = writeln!(out, "  {} - {} ({})", record.id, record.name, record.category);
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use farm_map_engine::FarmStore;
    use farm_map_farm_models::{GeoPoint, LivestockCategory};
    use farm_map_geography::BoundingBox;

    use super::*;

    fn record(id: &str, lat: f64, lng: f64, status: HealthStatus) -> GeoRecord {
        GeoRecord {
            id: id.into(),
            name: format!("Farm {id}"),
            location: GeoPoint::new(lat, lng),
            category: LivestockCategory::Cattle,
            herd_size: 40,
            health_status: status,
            last_check_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            contact: None,
        }
    }

    /// The grid rows of a rendered view, without borders or legend.
    fn grid_of(view: &str) -> String {
        view.lines()
            .filter(|line| line.starts_with('|'))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn clips_out_of_region_markers() {
        let session = MapSession::new(FarmStore::new(vec![
            record("F1", 20.0, 78.0, HealthStatus::Healthy),
            record("F2", 55.0, 78.0, HealthStatus::Critical),
        ]));
        let projector = Projector::new(BoundingBox::demo_region()).unwrap();
        let view = map_view(&session, &projector);
        let grid = grid_of(&view);
        assert_eq!(grid.matches('o').count(), 1);
        // F2 is north of the region and must not be drawn, but it still
        // counts toward the visible-set stats.
        assert!(!grid.contains('!'));
        assert!(view.contains("farms: 2  critical: 1"));
    }

    #[test]
    fn selected_marker_uses_distinct_glyph() {
        let mut session = MapSession::new(FarmStore::new(vec![record(
            "F1",
            20.0,
            78.0,
            HealthStatus::Healthy,
        )]));
        session.select("F1");
        let projector = Projector::new(BoundingBox::demo_region()).unwrap();
        let grid = grid_of(&map_view(&session, &projector));
        assert_eq!(grid.matches('@').count(), 1);
        assert!(!grid.contains('o'));
    }

    #[test]
    fn detail_panel_lists_record_fields() {
        let mut farm = record("FM-1000", 20.0, 78.0, HealthStatus::Observation);
        farm.contact = Some("+91-98765-43210".into());
        let panel = detail_panel(&farm);
        assert!(panel.contains("Farm FM-1000"));
        assert!(panel.contains("OBSERVATION"));
        assert!(panel.contains("+91-98765-43210"));
    }
}
