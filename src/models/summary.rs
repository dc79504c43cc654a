//! Summary statistics over a collection of printing records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintingSummary {
    pub total_print_jobs: usize,
    pub total_quantity_printed: i64,
    pub total_wastage: i64,
    pub accepted_jobs: usize,
    pub pending_jobs: usize,
    pub rejected_jobs: usize,
    pub in_progress_jobs: usize,
    pub hold_jobs: usize,
    /// Records whose step status is "planned".
    pub planned_jobs: usize,
    /// Total wastage over total quantity, in percent, two decimals.
    pub average_wastage_percentage: f64,
}
