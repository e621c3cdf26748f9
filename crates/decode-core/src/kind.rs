//! Target kinds a decoder converts values into
//!
//! Display names are part of the rendered message contract, e.g. the `int8`
//! in `cannot parse 'Count', 300 overflows int8`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Classification of the type a value is being decoded into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Invalid,
    Bool,
    /// 64-bit signed integer
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// 64-bit unsigned integer
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Array,
    Slice,
    Map,
    Struct,
    #[serde(rename = "ptr")]
    Pointer,
    Interface,
}

/// Representable range of a numeric kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limits {
    Integer { min: i128, max: i128 },
    /// Floats are symmetric around zero
    Float { max: f64 },
}

impl Kind {
    pub const ALL: [Kind; 21] = [
        Kind::Invalid,
        Kind::Bool,
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Uint,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Float32,
        Kind::Float64,
        Kind::String,
        Kind::Array,
        Kind::Slice,
        Kind::Map,
        Kind::Struct,
        Kind::Pointer,
        Kind::Interface,
    ];

    /// Canonical display name
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Pointer => "ptr",
            Kind::Interface => "interface",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Kind::Int
                | Kind::Int8
                | Kind::Int16
                | Kind::Int32
                | Kind::Int64
                | Kind::Uint
                | Kind::Uint8
                | Kind::Uint16
                | Kind::Uint32
                | Kind::Uint64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Range of values the kind can hold, `None` for non-numeric kinds
    pub fn limits(self) -> Option<Limits> {
        let limits = match self {
            Kind::Int8 => Limits::Integer { min: i8::MIN.into(), max: i8::MAX.into() },
            Kind::Int16 => Limits::Integer { min: i16::MIN.into(), max: i16::MAX.into() },
            Kind::Int32 => Limits::Integer { min: i32::MIN.into(), max: i32::MAX.into() },
            Kind::Int | Kind::Int64 => Limits::Integer { min: i64::MIN.into(), max: i64::MAX.into() },
            Kind::Uint8 => Limits::Integer { min: 0, max: u8::MAX.into() },
            Kind::Uint16 => Limits::Integer { min: 0, max: u16::MAX.into() },
            Kind::Uint32 => Limits::Integer { min: 0, max: u32::MAX.into() },
            Kind::Uint | Kind::Uint64 => Limits::Integer { min: 0, max: u64::MAX.into() },
            Kind::Float32 => Limits::Float { max: f32::MAX.into() },
            Kind::Float64 => Limits::Float { max: f64::MAX },
            _ => return None,
        };
        Some(limits)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Limits::Integer { min, max } => write!(f, "range [{}, {}]", min, max),
            Limits::Float { max } => write!(f, "range ±{:e}", max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Kind::Int.to_string(), "int");
        assert_eq!(Kind::Int8.to_string(), "int8");
        assert_eq!(Kind::Float64.to_string(), "float64");
        assert_eq!(Kind::Pointer.to_string(), "ptr");
    }

    #[test]
    fn test_from_str_accepts_every_display_name() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "int128".parse::<Kind>().unwrap_err();
        assert_eq!(err, CoreError::UnknownKind("int128".to_string()));
    }

    #[test]
    fn test_serde_uses_display_names() {
        for kind in Kind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
            let parsed: Kind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_limits() {
        assert_eq!(Kind::Int8.limits(), Some(Limits::Integer { min: -128, max: 127 }));
        assert_eq!(
            Kind::Uint64.limits(),
            Some(Limits::Integer { min: 0, max: u64::MAX as i128 })
        );
        assert_eq!(Kind::Float32.limits(), Some(Limits::Float { max: f32::MAX as f64 }));
        assert_eq!(Kind::String.limits(), None);
        assert_eq!(Kind::Bool.limits(), None);
    }

    #[test]
    fn test_limits_display() {
        assert_eq!(Kind::Int8.limits().unwrap().to_string(), "range [-128, 127]");
        assert_eq!(Kind::Uint16.limits().unwrap().to_string(), "range [0, 65535]");
        assert!(Kind::Float64.limits().unwrap().to_string().starts_with("range ±"));
    }

    #[test]
    fn test_predicates() {
        assert!(Kind::Uint32.is_integer());
        assert!(!Kind::Uint32.is_float());
        assert!(Kind::Float32.is_numeric());
        assert!(!Kind::Struct.is_numeric());
    }
}
