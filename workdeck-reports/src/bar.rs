//! Bar chart layouts
//!
//! Pure geometry over the aggregate tables: each function turns a table
//! into labeled bar heights for a fixed-height panel. Zero totals produce
//! zero-height bars rather than NaN.

use crate::tables::{CategoryCount, PriorityTotals, ProjectOutcome, TrendPoint};

/// One laid-out bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f32,
    pub height: f32,
}

/// Paired success/failure bars for one project
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomePair {
    pub label: String,
    pub success_height: f32,
    pub failure_height: f32,
}

fn share_bar(label: &str, value: f32, total: f32, panel_height: f32) -> Bar {
    let height = if total > 0.0 {
        (value / total) * panel_height
    } else {
        0.0
    };
    Bar {
        label: label.to_string(),
        value,
        height,
    }
}

/// Pending-task bars: each priority's height is its share of the total
pub fn priority_bars(totals: &PriorityTotals, panel_height: f32) -> Vec<Bar> {
    let total = totals.total() as f32;
    vec![
        share_bar("High", totals.high as f32, total, panel_height),
        share_bar("Medium", totals.medium as f32, total, panel_height),
        share_bar("Low", totals.low as f32, total, panel_height),
    ]
}

/// Completed-work bars: each category's height is its share of the total
pub fn share_bars(items: &[CategoryCount], panel_height: f32) -> Vec<Bar> {
    let total: f32 = items.iter().map(|c| c.count as f32).sum();
    items
        .iter()
        .map(|c| share_bar(&c.category, c.count as f32, total, panel_height))
        .collect()
}

/// Percentage-series bars: height is rate out of 100
pub fn percent_bars(points: &[TrendPoint], panel_height: f32) -> Vec<Bar> {
    points
        .iter()
        .map(|p| Bar {
            label: p.label.clone(),
            value: p.rate,
            height: (p.rate / 100.0) * panel_height,
        })
        .collect()
}

/// Project success/failure pairs, scaled by a fixed unit per percent
pub fn outcome_bars(projects: &[ProjectOutcome], unit: f32) -> Vec<OutcomePair> {
    projects
        .iter()
        .map(|p| OutcomePair {
            label: p.name.clone(),
            success_height: p.success * unit,
            failure_height: p.failure * unit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::MetricTables;

    const PANEL: f32 = 200.0;

    #[test]
    fn test_priority_bars_share_panel() {
        let tables = MetricTables::sample();
        let bars = priority_bars(&tables.pending, PANEL);

        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].label, "High");
        // 8 of 30 → 53.33px of 200
        assert!((bars[0].height - 8.0 / 30.0 * PANEL).abs() < 1e-4);

        let total_height: f32 = bars.iter().map(|b| b.height).sum();
        assert!((total_height - PANEL).abs() < 1e-3);
    }

    #[test]
    fn test_zero_total_has_no_height() {
        let empty = PriorityTotals {
            high: 0,
            medium: 0,
            low: 0,
        };
        for bar in priority_bars(&empty, PANEL) {
            assert_eq!(bar.height, 0.0);
        }

        assert!(share_bars(&[], PANEL).is_empty());
    }

    #[test]
    fn test_percent_bars_scale_by_rate() {
        let tables = MetricTables::sample();
        let bars = percent_bars(&tables.performance, PANEL);

        assert_eq!(bars.len(), 6);
        assert_eq!(bars[0].label, "Jan");
        assert!((bars[0].height - 150.0).abs() < 1e-4); // 75% of 200
        assert!((bars[5].height - 184.0).abs() < 1e-4); // 92% of 200
    }

    #[test]
    fn test_outcome_bars_use_fixed_unit() {
        let tables = MetricTables::sample();
        let pairs = outcome_bars(&tables.projects, 2.0);

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].label, "Project A");
        assert!((pairs[0].success_height - 170.0).abs() < 1e-4);
        assert!((pairs[0].failure_height - 30.0).abs() < 1e-4);
    }
}
