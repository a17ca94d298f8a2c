//! Workdeck reporting view
//!
//! Stateless chart-layout geometry over pre-aggregated metric tables: bar
//! heights, donut slice arcs, and heatmap cell colors. No mutation and no
//! dependency on the chat core; a replacement renderer only has to accept
//! the same table shapes and stay stateless.

pub mod bar;
pub mod heatmap;
pub mod pie;
pub mod tables;

pub use bar::{outcome_bars, percent_bars, priority_bars, share_bars, Bar, OutcomePair};
pub use heatmap::{heatmap_colors, intensity_color, Rgb};
pub use pie::{pie_slices, PieSlice, CENTER, RADIUS};
pub use tables::{
    CategoryCount, MetricTables, PriorityTotals, ProjectOutcome, TrendPoint, TypeCount,
    WorkloadGrid,
};
