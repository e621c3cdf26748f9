//! Leaf errors: one field, one failure
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::decode_error::{BoxError, DecodeError};
use crate::kind::Kind;

/// A named value could not be interpreted as the requested kind
#[derive(Error, Debug)]
#[error("cannot parse '{name}' as {to}: {err}")]
pub struct ParseError {
    /// Field or path identifier
    pub name: String,
    /// The offending input
    pub val: Value,
    pub to: Kind,
    /// Why parsing failed
    #[source]
    pub err: BoxError,
}

impl ParseError {
    pub fn new(
        name: impl Into<String>,
        val: impl Into<Value>,
        to: Kind,
        err: impl Into<BoxError>,
    ) -> Self {
        Self {
            name: name.into(),
            val: val.into(),
            to,
            err: err.into(),
        }
    }
}

/// A named value parsed but does not fit in the requested kind
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot parse '{name}', {} overflows {to}", InputValue(.val))]
pub struct OverflowError {
    pub name: String,
    pub val: Value,
    pub to: Kind,
}

impl OverflowError {
    pub fn new(name: impl Into<String>, val: impl Into<Value>, to: Kind) -> Self {
        Self {
            name: name.into(),
            val: val.into(),
            to,
        }
    }

    /// Message with the exceeded range appended, when the kind has one
    pub fn render_with_range(&self) -> String {
        match self.to.limits() {
            Some(limits) => format!("{} ({})", self, limits),
            None => self.to_string(),
        }
    }
}

/// Shorthand used by decoders at the failure site
pub fn parse_error(
    name: impl Into<String>,
    val: impl Into<Value>,
    to: Kind,
    err: impl Into<BoxError>,
) -> ParseError {
    ParseError::new(name, val, to, err)
}

pub fn overflow_error(name: impl Into<String>, val: impl Into<Value>, to: Kind) -> DecodeError {
    OverflowError::new(name, val, to).into()
}

/// Renders an input value the way it appeared: strings bare, everything else as JSON
pub(crate) struct InputValue<'a>(pub &'a Value);

impl fmt::Display for InputValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
