//! AggregateError: every failure of one decode, rendered as one message
//!
//! Entries keep append order for inspection. The rendered message sorts its
//! lines so that the output does not depend on the order fields were visited.

use std::error::Error as StdError;
use std::fmt;

use crate::decode_error::DecodeError;
use crate::leaf::{OverflowError, ParseError};
use crate::options::RenderOptions;
use crate::report::DecodeReport;

#[derive(Debug, Default)]
pub struct AggregateError {
    errors: Vec<DecodeError>,
}

impl AggregateError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a failure. Aggregates are spliced in, never nested.
    pub fn append(&mut self, err: impl Into<DecodeError>) {
        match err.into() {
            DecodeError::Aggregate(inner) => {
                tracing::debug!(
                    merged = inner.errors.len(),
                    total = self.errors.len() + inner.errors.len(),
                    "flattening nested decode errors"
                );
                self.errors.extend(inner.errors);
            }
            leaf => {
                tracing::trace!(
                    field = leaf.field_name().unwrap_or("-"),
                    total = self.errors.len() + 1,
                    "recorded decode error"
                );
                self.errors.push(leaf);
            }
        }
    }

    /// Fold another aggregate into this one
    pub fn merge(&mut self, other: AggregateError) {
        self.append(other);
    }

    /// Keep the value of a successful step, record the failure otherwise
    pub fn record<T, E: Into<DecodeError>>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.append(err);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Entries in append order
    pub fn iter(&self) -> std::slice::Iter<'_, DecodeError> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<DecodeError> {
        self.errors
    }

    pub fn parse_errors(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter_map(DecodeError::as_parse)
    }

    pub fn overflow_errors(&self) -> impl Iterator<Item = &OverflowError> {
        self.errors.iter().filter_map(DecodeError::as_overflow)
    }

    /// `Ok(())` when nothing was recorded; an empty aggregate is not a failure
    pub fn into_result(self) -> Result<(), AggregateError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = self.errors.len(), "decode finished with errors");
            Err(self)
        }
    }

    /// Leaf messages in rendered order. Every line shares the `* ` prefix,
    /// so sorting the bare messages orders the lines identically.
    pub(crate) fn sorted_messages(&self, options: &RenderOptions) -> Vec<(String, &DecodeError)> {
        let mut messages: Vec<_> = self
            .errors
            .iter()
            .map(|err| (err.render_with(options), err))
            .collect();
        messages.sort_by(|a, b| a.0.cmp(&b.0));
        messages
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        let lines: Vec<String> = self
            .sorted_messages(options)
            .into_iter()
            .map(|(message, _)| format!("* {}", message))
            .collect();
        format!("{} error(s) decoding:\n\n{}", self.errors.len(), lines.join("\n"))
    }

    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Structured view of the same content as `render`
    pub fn report(&self) -> DecodeReport {
        DecodeReport::from_aggregate(self, &RenderOptions::default())
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Several causes, none primary: use `wrapped_errors` instead of `source`
impl StdError for AggregateError {}

impl<E: Into<DecodeError>> Extend<E> for AggregateError {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for err in iter {
            self.append(err);
        }
    }
}

impl<E: Into<DecodeError>> FromIterator<E> for AggregateError {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut errors = AggregateError::new();
        errors.extend(iter);
        errors
    }
}

impl IntoIterator for AggregateError {
    type Item = DecodeError;
    type IntoIter = std::vec::IntoIter<DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a DecodeError;
    type IntoIter = std::slice::Iter<'a, DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Errors that wrap several causes at once
pub trait WrappedErrors {
    fn wrapped_errors(&self) -> &[DecodeError];
}

impl WrappedErrors for AggregateError {
    fn wrapped_errors(&self) -> &[DecodeError] {
        &self.errors
    }
}

impl<T: WrappedErrors + ?Sized> WrappedErrors for &T {
    fn wrapped_errors(&self) -> &[DecodeError] {
        (**self).wrapped_errors()
    }
}

impl<T: WrappedErrors> WrappedErrors for Option<T> {
    fn wrapped_errors(&self) -> &[DecodeError] {
        match self {
            Some(inner) => inner.wrapped_errors(),
            None => &[],
        }
    }
}
