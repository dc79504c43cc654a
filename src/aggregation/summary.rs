//! Summary aggregation.
//!
//! Folds a collection of printing records into one [`PrintingSummary`].

use crate::models::record::{PrintingRecord, PrintingStatus, DEFAULT_STEP_STATUS};
use crate::models::summary::PrintingSummary;

/// Compute summary statistics over `records`.
///
/// Pure and order-independent. An empty slice yields an all-zero summary.
/// Totals saturate at `i64::MAX` instead of overflowing.
pub fn summarize(records: &[PrintingRecord]) -> PrintingSummary {
    let mut summary = PrintingSummary {
        total_print_jobs: records.len(),
        ..PrintingSummary::default()
    };

    for record in records {
        summary.total_quantity_printed = summary
            .total_quantity_printed
            .saturating_add(record.quantity);
        summary.total_wastage = summary.total_wastage.saturating_add(record.wastage);

        match record.status {
            PrintingStatus::Accept => summary.accepted_jobs += 1,
            PrintingStatus::Pending => summary.pending_jobs += 1,
            PrintingStatus::Rejected => summary.rejected_jobs += 1,
            PrintingStatus::InProgress => summary.in_progress_jobs += 1,
            PrintingStatus::Hold => summary.hold_jobs += 1,
        }

        if record.step_status == DEFAULT_STEP_STATUS {
            summary.planned_jobs += 1;
        }
    }

    summary.average_wastage_percentage =
        wastage_percentage(summary.total_wastage, summary.total_quantity_printed);

    summary
}

/// Wastage as a percentage of quantity, rounded to two decimals.
///
/// Zero when no quantity was printed.
pub fn wastage_percentage(wastage: i64, quantity: i64) -> f64 {
    if quantity == 0 {
        return 0.0;
    }
    let pct = wastage as f64 / quantity as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}
