//! Decode Core: aggregated error reporting for value decoders
//!
//! A decoder that walks a loosely-typed input and fills a strongly-typed
//! target can fail on many fields at once. This crate gives it one place to
//! collect those failures and one deterministic message to surface.
//!
//! # Example
//!
//! ```
//! use decode_core::{AggregateError, Kind, OverflowError, ParseError};
//!
//! let mut errors = AggregateError::new();
//! errors.append(ParseError::new("Age", "abc", Kind::Int, "invalid syntax"));
//! errors.append(OverflowError::new("Count", 300, Kind::Int8));
//!
//! assert_eq!(
//!     errors.to_string(),
//!     "2 error(s) decoding:\n\n\
//!      * cannot parse 'Age' as int: invalid syntax\n\
//!      * cannot parse 'Count', 300 overflows int8"
//! );
//! ```

pub mod aggregate;
pub mod decode_error;
pub mod error;
pub mod kind;
pub mod leaf;
pub mod options;
pub mod report;

pub use aggregate::{AggregateError, WrappedErrors};
pub use decode_error::{BoxError, DecodeError};
pub use error::CoreError;
pub use kind::{Kind, Limits};
pub use leaf::{overflow_error, parse_error, OverflowError, ParseError};
pub use options::{OverflowDetail, RenderOptions};
pub use report::{DecodeReport, ErrorClass, ReportEntry};

/// Result of a decode that collects its failures into an [`AggregateError`].
pub type DecodeResult<T> = Result<T, AggregateError>;

/// Crate version
pub const DECODE_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
