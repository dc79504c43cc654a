//! Ordered fallback chains.
//!
//! A field is described by the list of places it may come from. Sources are
//! tried in order and the first one holding a usable value wins. A source is
//! skipped when it is missing, `null`, blank, or cannot be coerced to the
//! field's type.

use serde_json::Value;

use crate::extraction::json_path::{resolve_present, value_to_bool, value_to_int, value_to_string};

/// Where a candidate value lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Path inside the nested printing detail sub-record.
    Detail(&'static str),
    /// Path inside the raw step item itself.
    Item(&'static str),
}

/// Candidate sources for one output field, in priority order.
#[derive(Debug, Clone, Copy)]
pub struct FieldChain {
    pub field: &'static str,
    pub sources: &'static [Source],
}

impl FieldChain {
    pub const fn new(field: &'static str, sources: &'static [Source]) -> Self {
        Self { field, sources }
    }
}

/// The two JSON documents a step record draws from.
#[derive(Debug, Clone, Copy)]
pub struct StepSources<'a> {
    pub item: &'a Value,
    pub detail: Option<&'a Value>,
}

impl<'a> StepSources<'a> {
    pub fn new(item: &'a Value, detail: Option<&'a Value>) -> Self {
        Self { item, detail }
    }

    fn lookup(&self, source: Source) -> Option<&'a Value> {
        match source {
            Source::Detail(path) => self.detail.and_then(|d| resolve_present(d, path)),
            Source::Item(path) => resolve_present(self.item, path),
        }
    }

    /// First present value along the chain, converted with `convert`.
    pub fn resolve_with<T>(
        &self,
        chain: &FieldChain,
        convert: impl Fn(&Value) -> Option<T>,
    ) -> Option<T> {
        chain
            .sources
            .iter()
            .filter_map(|source| self.lookup(*source))
            .find_map(convert)
    }

    /// Resolve a scalar as a string. Objects and arrays are skipped.
    pub fn string(&self, chain: &FieldChain) -> Option<String> {
        self.resolve_with(chain, |v| match v {
            Value::Object(_) | Value::Array(_) => None,
            other => Some(value_to_string(other)),
        })
    }

    pub fn int(&self, chain: &FieldChain) -> Option<i64> {
        self.resolve_with(chain, value_to_int)
    }

    pub fn bool(&self, chain: &FieldChain) -> Option<bool> {
        self.resolve_with(chain, value_to_bool)
    }
}
