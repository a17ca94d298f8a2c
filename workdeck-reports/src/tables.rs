//! Aggregate metric tables
//!
//! The reporting view consumes pre-aggregated tables; where the numbers
//! come from is out of scope. Any replacement renderer must accept these
//! same shapes. The sample tables reproduce the prototype's fixed dataset.

use serde::{Deserialize, Serialize};

/// Pending-task counts by priority
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityTotals {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl PriorityTotals {
    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low
    }
}

/// One point of the monthly percentage series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub rate: f32,
}

/// Completed-work count for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

/// Notification count for one notification type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
}

/// 2-D workload intensity grid; cell values in `[0, 1]`
///
/// `cells` is row-major: `cells[i][j]` is the intensity for `rows[i]` at
/// `columns[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGrid {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<f32>>,
}

/// Success/failure percentage pair for one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectOutcome {
    pub name: String,
    pub success: f32,
    pub failure: f32,
}

/// The full table set the reporting view accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTables {
    pub pending: PriorityTotals,
    pub performance: Vec<TrendPoint>,
    pub completed: Vec<CategoryCount>,
    pub notifications: Vec<TypeCount>,
    pub workload: WorkloadGrid,
    pub projects: Vec<ProjectOutcome>,
}

fn point(label: &str, rate: f32) -> TrendPoint {
    TrendPoint {
        label: label.to_string(),
        rate,
    }
}

fn category(category: &str, count: u32) -> CategoryCount {
    CategoryCount {
        category: category.to_string(),
        count,
    }
}

fn type_count(kind: &str, count: u32) -> TypeCount {
    TypeCount {
        kind: kind.to_string(),
        count,
    }
}

impl MetricTables {
    /// The prototype's fixed dataset
    pub fn sample() -> Self {
        Self {
            pending: PriorityTotals {
                high: 8,
                medium: 15,
                low: 7,
            },
            performance: vec![
                point("Jan", 75.0),
                point("Feb", 78.0),
                point("Mar", 82.0),
                point("Apr", 85.0),
                point("May", 88.0),
                point("Jun", 92.0),
            ],
            completed: vec![
                category("Bugs Fixed", 24),
                category("Features Developed", 18),
                category("Documents Completed", 32),
            ],
            notifications: vec![
                type_count("Mentions", 12),
                type_count("Meeting Reminders", 8),
                type_count("Deadlines", 5),
                type_count("Project Updates", 15),
            ],
            workload: WorkloadGrid {
                rows: vec![
                    "9am".to_string(),
                    "11am".to_string(),
                    "1pm".to_string(),
                    "3pm".to_string(),
                    "5pm".to_string(),
                ],
                columns: vec![
                    "Mon".to_string(),
                    "Tue".to_string(),
                    "Wed".to_string(),
                    "Thu".to_string(),
                    "Fri".to_string(),
                ],
                cells: vec![
                    vec![0.2, 0.5, 0.8, 0.3, 0.1],
                    vec![0.4, 0.9, 0.7, 0.5, 0.3],
                    vec![0.3, 0.4, 1.0, 0.8, 0.2],
                    vec![0.5, 0.6, 0.5, 0.4, 0.1],
                    vec![0.1, 0.3, 0.6, 0.7, 0.4],
                ],
            },
            projects: vec![
                ProjectOutcome {
                    name: "Project A".to_string(),
                    success: 85.0,
                    failure: 15.0,
                },
                ProjectOutcome {
                    name: "Project B".to_string(),
                    success: 70.0,
                    failure: 30.0,
                },
                ProjectOutcome {
                    name: "Project C".to_string(),
                    success: 92.0,
                    failure: 8.0,
                },
            ],
        }
    }
}
