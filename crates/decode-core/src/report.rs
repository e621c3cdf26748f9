//! Decode Report: serializable form of an AggregateError
use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateError;
use crate::decode_error::DecodeError;
use crate::kind::Kind;
use crate::options::RenderOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClass {
    Parse,
    Overflow,
    Foreign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub class: ErrorClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Offending input as received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Kind>,
    /// Message of the underlying cause (parse failures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    pub message: String,
}

/// Entries follow the rendered line order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeReport {
    pub count: usize,
    pub errors: Vec<ReportEntry>,
}

impl ReportEntry {
    fn new(err: &DecodeError, message: String) -> Self {
        match err {
            DecodeError::Parse(e) => Self {
                class: ErrorClass::Parse,
                field: Some(e.name.clone()),
                value: Some(e.val.clone()),
                target: Some(e.to),
                cause: Some(e.err.to_string()),
                message,
            },
            DecodeError::Overflow(e) => Self {
                class: ErrorClass::Overflow,
                field: Some(e.name.clone()),
                value: Some(e.val.clone()),
                target: Some(e.to),
                cause: None,
                message,
            },
            DecodeError::Aggregate(_) | DecodeError::Foreign(_) => Self {
                class: ErrorClass::Foreign,
                field: None,
                value: None,
                target: None,
                cause: None,
                message,
            },
        }
    }
}

impl DecodeReport {
    pub fn from_aggregate(errors: &AggregateError, options: &RenderOptions) -> Self {
        let entries: Vec<ReportEntry> = errors
            .sorted_messages(options)
            .into_iter()
            .map(|(message, err)| ReportEntry::new(err, message))
            .collect();

        Self {
            count: entries.len(),
            errors: entries,
        }
    }
}
