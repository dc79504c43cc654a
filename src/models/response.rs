//! Printing-details API envelope.
//!
//! The API answers with:
//! ```json
//! { "success": true, "data": [ ...step records... ], "message": "..." }
//! ```
//! Every field is optional here so a malformed body is reported as a
//! format problem instead of a serde error.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct PrintingDetailsResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PrintingDetailsResponse {
    /// The raw step records, if the envelope is well-formed.
    ///
    /// Returns a description of the problem otherwise.
    pub fn into_records(self) -> Result<Vec<Value>, String> {
        if self.success != Some(true) {
            return Err(match self.message {
                Some(msg) => format!("success flag not set: {}", msg),
                None => "success flag not set".to_string(),
            });
        }

        match self.data {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(format!("data is not an array (got {})", type_name(&other))),
            None => Err("data field missing".to_string()),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
