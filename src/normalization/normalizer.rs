//! Printing record normalizer.
//!
//! Maps each raw step item to exactly one [`PrintingRecord`]:
//! 1. Locate the nested printing detail
//! 2. No detail: build a placeholder record (id 0, pending, zero counts)
//! 3. Detail present: resolve every field through its fallback chain
//!
//! Normalization never fails. Missing or unusable fields take their defaults.

use serde_json::Value;

use crate::extraction::fallback::{FieldChain, StepSources};
use crate::logging::structured::LogContext;
use crate::models::record::{
    PrintingRecord, PrintingStatus, DEFAULT_JOB_DEMAND, DEFAULT_STEP_NAME, DEFAULT_STEP_STATUS,
};

use super::context::NormalizeContext;
use super::fields;

/// Normalize a batch of raw step items, preserving length and order.
pub fn normalize_step_records(items: &[Value], ctx: &NormalizeContext) -> Vec<PrintingRecord> {
    let log_ctx = ctx.log_context();

    let records: Vec<PrintingRecord> = items
        .iter()
        .map(|item| normalize_with_log(item, ctx, &log_ctx))
        .collect();

    let placeholders = items.iter().filter(|i| locate_detail(i).is_none()).count();
    log::debug!(
        "{} NORMALIZE_COMPLETE records={} placeholders={}",
        log_ctx,
        records.len(),
        placeholders
    );

    records
}

/// Normalize a single raw step item.
pub fn normalize_step_record(item: &Value, ctx: &NormalizeContext) -> PrintingRecord {
    normalize_with_log(item, ctx, &ctx.log_context())
}

fn normalize_with_log(item: &Value, ctx: &NormalizeContext, log_ctx: &LogContext) -> PrintingRecord {
    match locate_detail(item) {
        Some(detail) => from_detail(item, detail, ctx, log_ctx),
        None => placeholder(item, ctx),
    }
}

/// Find the nested printing detail of a step item.
///
/// Accepts an object, or an array whose first element is an object.
pub fn locate_detail(item: &Value) -> Option<&Value> {
    fields::DETAIL_KEYS
        .iter()
        .filter_map(|key| item.get(*key))
        .find_map(|candidate| match candidate {
            Value::Object(_) => Some(candidate),
            Value::Array(arr) => arr.first().filter(|d| d.is_object()),
            _ => None,
        })
}

fn from_detail(
    item: &Value,
    detail: &Value,
    ctx: &NormalizeContext,
    log_ctx: &LogContext,
) -> PrintingRecord {
    let src = StepSources::new(item, Some(detail));

    let status = match src.string(&fields::STATUS) {
        Some(raw) => PrintingStatus::parse(&raw).unwrap_or_else(|| {
            log::warn!(
                "{} STATUS_UNRECOGNIZED value={:?} default={}",
                log_ctx,
                raw,
                PrintingStatus::default()
            );
            PrintingStatus::default()
        }),
        None => PrintingStatus::default(),
    };

    let mut record = step_metadata(&src, &fields::JOB_NO, ctx);
    record.id = src.int(&fields::ID).unwrap_or(0);
    record.status = status;
    record.date = src.string(&fields::DATE).unwrap_or_else(|| ctx.now_iso());
    record.shift = src.string(&fields::SHIFT);
    record.opr_name = src.string(&fields::OPERATOR);
    record.no_of_colours = src.int(&fields::COLOURS).unwrap_or(0);
    record.inks_used = src.string(&fields::INKS);
    record.quantity = src.int(&fields::QUANTITY).unwrap_or(0);
    record.wastage = src.int(&fields::WASTAGE).unwrap_or(0);
    record.coating_type = src.string(&fields::COATING);
    record.separate_sheets = src.bool(&fields::SEPARATE_SHEETS).unwrap_or(false);
    record.extra_sheets = src.int(&fields::EXTRA_SHEETS).unwrap_or(0);

    log::trace!(
        "{} RECORD_NORMALIZED id={} job={} status={}",
        log_ctx,
        record.id,
        record.job_nrc_job_no,
        record.status
    );

    record
}

/// Record for a step that has no printing detail yet.
fn placeholder(item: &Value, ctx: &NormalizeContext) -> PrintingRecord {
    let src = StepSources::new(item, None);
    let mut record = step_metadata(&src, &fields::PLACEHOLDER_JOB_NO, ctx);
    record.date = src
        .string(&fields::PLACEHOLDER_DATE)
        .unwrap_or_else(|| ctx.now_iso());
    record
}

/// Fields shared by both paths; detail-only fields start at their defaults.
fn step_metadata(
    src: &StepSources<'_>,
    job_chain: &FieldChain,
    ctx: &NormalizeContext,
) -> PrintingRecord {
    PrintingRecord {
        id: 0,
        job_nrc_job_no: src
            .string(job_chain)
            .unwrap_or_else(|| ctx.fallback_job_no.clone()),
        status: PrintingStatus::Pending,
        date: String::new(),
        shift: None,
        opr_name: None,
        no_of_colours: 0,
        inks_used: None,
        quantity: 0,
        wastage: 0,
        coating_type: None,
        separate_sheets: false,
        extra_sheets: 0,
        machine: src.string(&fields::MACHINE),
        step_status: src
            .string(&fields::STEP_STATUS)
            .unwrap_or_else(|| DEFAULT_STEP_STATUS.to_string()),
        step_name: src
            .string(&fields::STEP_NAME)
            .unwrap_or_else(|| DEFAULT_STEP_NAME.to_string()),
        user: src.string(&fields::USER),
        start_date: src.string(&fields::START_DATE),
        end_date: src.string(&fields::END_DATE),
        job_demand: src
            .string(&fields::JOB_DEMAND)
            .unwrap_or_else(|| DEFAULT_JOB_DEMAND.to_string()),
        machine_details: src
            .item
            .get("machineDetails")
            .and_then(|m| m.as_array())
            .cloned()
            .unwrap_or_default(),
    }
}
