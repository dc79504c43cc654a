//! Normalized printing-step record.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Step name used when the raw item does not carry one.
pub const DEFAULT_STEP_NAME: &str = "PrintingDetails";

/// Step status used when the raw item does not carry one.
pub const DEFAULT_STEP_STATUS: &str = "planned";

/// Job demand level used when the job-planning reference has none.
pub const DEFAULT_JOB_DEMAND: &str = "medium";

/// QC status of a printing detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintingStatus {
    Accept,
    #[default]
    Pending,
    Rejected,
    InProgress,
    Hold,
}

impl PrintingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrintingStatus::Accept => "accept",
            PrintingStatus::Pending => "pending",
            PrintingStatus::Rejected => "rejected",
            PrintingStatus::InProgress => "in_progress",
            PrintingStatus::Hold => "hold",
        }
    }

    /// Parse a status as sent by the API.
    ///
    /// Matching is case-insensitive and treats `-` and spaces as `_`.
    /// Returns `None` for anything unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "accept" | "accepted" => Some(PrintingStatus::Accept),
            "pending" => Some(PrintingStatus::Pending),
            "reject" | "rejected" => Some(PrintingStatus::Rejected),
            "in_progress" | "inprogress" => Some(PrintingStatus::InProgress),
            "hold" | "on_hold" => Some(PrintingStatus::Hold),
            _ => None,
        }
    }
}

impl fmt::Display for PrintingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One printing step, in the shape the dashboard consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintingRecord {
    /// Detail id, 0 when the step has no printing detail yet.
    pub id: i64,
    pub job_nrc_job_no: String,
    pub status: PrintingStatus,
    /// ISO-8601 timestamp.
    pub date: String,
    pub shift: Option<String>,
    pub opr_name: Option<String>,
    pub no_of_colours: i64,
    pub inks_used: Option<String>,
    pub quantity: i64,
    pub wastage: i64,
    pub coating_type: Option<String>,
    pub separate_sheets: bool,
    pub extra_sheets: i64,
    pub machine: Option<String>,

    // Step-level metadata
    pub step_status: String,
    pub step_name: String,
    pub user: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub job_demand: String,
    pub machine_details: Vec<Value>,
}

impl PrintingRecord {
    /// Whether the id is the unset sentinel `0`.
    ///
    /// Holds for every record built without a printing detail, and also for
    /// a detail that carries no usable id. It does not tell the two apart;
    /// use [`locate_detail`](crate::normalization::locate_detail) on the raw
    /// item for that.
    pub fn has_unset_id(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(PrintingStatus::parse("accept"), Some(PrintingStatus::Accept));
        assert_eq!(PrintingStatus::parse("Accepted"), Some(PrintingStatus::Accept));
        assert_eq!(PrintingStatus::parse("in-progress"), Some(PrintingStatus::InProgress));
        assert_eq!(PrintingStatus::parse("IN PROGRESS"), Some(PrintingStatus::InProgress));
        assert_eq!(PrintingStatus::parse(" hold "), Some(PrintingStatus::Hold));
        assert_eq!(PrintingStatus::parse("done"), None);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&PrintingStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert_eq!(PrintingStatus::default(), PrintingStatus::Pending);
    }
}
