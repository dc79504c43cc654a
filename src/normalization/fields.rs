//! Field mapping table for printing records.
//!
//! One chain per output field. Chains that only name detail sources resolve
//! to nothing when the step has no printing detail.

use crate::extraction::fallback::{FieldChain, Source};

/// Keys a nested printing detail may live under.
pub const DETAIL_KEYS: &[&str] = &["printingDetails", "printingDetail"];

pub const ID: FieldChain = FieldChain::new("id", &[Source::Detail("id")]);

pub const JOB_NO: FieldChain = FieldChain::new(
    "jobNrcJobNo",
    &[
        Source::Detail("jobNrcJobNo"),
        Source::Item("jobPlanning.nrcJobNo"),
        Source::Item("jobNrcJobNo"),
    ],
);

/// Job number of a step that has no printing detail yet.
pub const PLACEHOLDER_JOB_NO: FieldChain =
    FieldChain::new("jobNrcJobNo", &[Source::Item("jobPlanning.nrcJobNo")]);

pub const STATUS: FieldChain = FieldChain::new("status", &[Source::Detail("status")]);

pub const DATE: FieldChain = FieldChain::new(
    "date",
    &[
        Source::Detail("date"),
        Source::Item("startDate"),
        Source::Detail("createdAt"),
        Source::Item("createdAt"),
    ],
);

/// Date of a step that has no printing detail yet.
pub const PLACEHOLDER_DATE: FieldChain =
    FieldChain::new("date", &[Source::Item("createdAt")]);

pub const SHIFT: FieldChain = FieldChain::new("shift", &[Source::Detail("shift")]);

pub const OPERATOR: FieldChain = FieldChain::new(
    "oprName",
    &[Source::Detail("oprName"), Source::Item("user")],
);

pub const COLOURS: FieldChain = FieldChain::new("noOfColours", &[Source::Detail("noOfColours")]);

pub const INKS: FieldChain = FieldChain::new("inksUsed", &[Source::Detail("inksUsed")]);

pub const QUANTITY: FieldChain = FieldChain::new("quantity", &[Source::Detail("quantity")]);

pub const WASTAGE: FieldChain = FieldChain::new("wastage", &[Source::Detail("wastage")]);

pub const COATING: FieldChain = FieldChain::new("coatingType", &[Source::Detail("coatingType")]);

pub const SEPARATE_SHEETS: FieldChain =
    FieldChain::new("separateSheets", &[Source::Detail("separateSheets")]);

pub const EXTRA_SHEETS: FieldChain =
    FieldChain::new("extraSheets", &[Source::Detail("extraSheets")]);

pub const MACHINE: FieldChain = FieldChain::new(
    "machine",
    &[
        Source::Detail("machine"),
        Source::Item("machineDetails.0.machineId"),
        Source::Item("machineDetails.0.machineCode"),
        Source::Item("machineDetails.0.id"),
        Source::Item("machineDetails.0"),
    ],
);

pub const STEP_STATUS: FieldChain = FieldChain::new("stepStatus", &[Source::Item("status")]);

pub const STEP_NAME: FieldChain = FieldChain::new("stepName", &[Source::Item("stepName")]);

pub const USER: FieldChain = FieldChain::new("user", &[Source::Item("user")]);

pub const START_DATE: FieldChain = FieldChain::new("startDate", &[Source::Item("startDate")]);

pub const END_DATE: FieldChain = FieldChain::new("endDate", &[Source::Item("endDate")]);

pub const JOB_DEMAND: FieldChain =
    FieldChain::new("jobDemand", &[Source::Item("jobPlanning.jobDemand")]);
