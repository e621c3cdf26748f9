//! The closed set of errors an aggregate can hold
use std::error::Error as StdError;
use std::fmt;

use crate::aggregate::AggregateError;
use crate::leaf::{OverflowError, ParseError};
use crate::options::{OverflowDetail, RenderOptions};

/// Opaque cause supplied by a decoder
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug)]
pub enum DecodeError {
    /// Only seen on the way in: `AggregateError::append` splices these
    Aggregate(AggregateError),
    Parse(ParseError),
    Overflow(OverflowError),
    /// Anything else the decoder raised
    Foreign(BoxError),
}

impl DecodeError {
    /// Wrap an arbitrary error or message as an opaque leaf
    pub fn foreign(err: impl Into<BoxError>) -> Self {
        DecodeError::Foreign(err.into())
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, DecodeError::Aggregate(_))
    }

    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            DecodeError::Parse(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_overflow(&self) -> Option<&OverflowError> {
        match self {
            DecodeError::Overflow(err) => Some(err),
            _ => None,
        }
    }

    /// Field the failure belongs to, when the error records one
    pub fn field_name(&self) -> Option<&str> {
        match self {
            DecodeError::Parse(err) => Some(&err.name),
            DecodeError::Overflow(err) => Some(&err.name),
            _ => None,
        }
    }

    /// Look inside a foreign leaf for a concrete error type
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        match self {
            DecodeError::Foreign(err) => err.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Leaf message under the given options
    pub fn render_with(&self, options: &RenderOptions) -> String {
        match (self, options.overflow_detail) {
            (DecodeError::Overflow(err), OverflowDetail::Range) => err.render_with_range(),
            (DecodeError::Aggregate(err), _) => err.render_with(options),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::Aggregate(err) => fmt::Display::fmt(err, f),
            DecodeError::Parse(err) => fmt::Display::fmt(err, f),
            DecodeError::Overflow(err) => fmt::Display::fmt(err, f),
            DecodeError::Foreign(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            DecodeError::Aggregate(err) => err.source(),
            DecodeError::Parse(err) => err.source(),
            DecodeError::Overflow(err) => err.source(),
            DecodeError::Foreign(err) => err.source(),
        }
    }
}

impl From<AggregateError> for DecodeError {
    fn from(err: AggregateError) -> Self {
        DecodeError::Aggregate(err)
    }
}

impl From<ParseError> for DecodeError {
    fn from(err: ParseError) -> Self {
        DecodeError::Parse(err)
    }
}

impl From<OverflowError> for DecodeError {
    fn from(err: OverflowError) -> Self {
        DecodeError::Overflow(err)
    }
}

impl From<BoxError> for DecodeError {
    fn from(err: BoxError) -> Self {
        DecodeError::Foreign(err)
    }
}

impl From<anyhow::Error> for DecodeError {
    fn from(err: anyhow::Error) -> Self {
        DecodeError::Foreign(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;

    #[derive(Debug, PartialEq)]
    struct MissingField(&'static str);

    impl fmt::Display for MissingField {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "missing field '{}'", self.0)
        }
    }

    impl StdError for MissingField {}

    #[test]
    fn test_foreign_renders_own_message() {
        let err = DecodeError::foreign("unsupported type: chan");
        assert_eq!(err.to_string(), "unsupported type: chan");
        assert!(err.field_name().is_none());
    }

    #[test]
    fn test_downcast_foreign() {
        let err = DecodeError::foreign(MissingField("Name"));
        assert_eq!(err.downcast_ref::<MissingField>(), Some(&MissingField("Name")));

        let parse: DecodeError = ParseError::new("Age", "x", Kind::Int, "bad").into();
        assert!(parse.downcast_ref::<MissingField>().is_none());
    }

    #[test]
    fn test_source_forwards_to_leaf() {
        let err: DecodeError = ParseError::new("Age", "x", Kind::Int, MissingField("Age")).into();
        assert_eq!(err.source().unwrap().to_string(), "missing field 'Age'");
        assert_eq!(err.field_name(), Some("Age"));
    }

    #[test]
    fn test_from_anyhow() {
        let err: DecodeError = anyhow::anyhow!("engine gave up").into();
        assert_eq!(err.to_string(), "engine gave up");
    }

    #[test]
    fn test_render_with_range_only_touches_overflow() {
        let options = RenderOptions::default().with_overflow_detail(OverflowDetail::Range);

        let overflow: DecodeError = OverflowError::new("Count", 300, Kind::Int8).into();
        assert_eq!(
            overflow.render_with(&options),
            "cannot parse 'Count', 300 overflows int8 (range [-128, 127])"
        );

        let parse: DecodeError = ParseError::new("Age", "abc", Kind::Int, "invalid syntax").into();
        assert_eq!(parse.render_with(&options), parse.to_string());
    }
}
