//! Render Options: how an aggregate turns into text
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How much an overflow message says about the exceeded range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowDetail {
    /// `cannot parse '<name>', <val> overflows <to>`, byte for byte
    #[default]
    Compat,
    /// The same message followed by ` (range [min, max])`
    Range,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub overflow_detail: OverflowDetail,
}

impl RenderOptions {
    pub fn with_overflow_detail(mut self, detail: OverflowDetail) -> Self {
        self.overflow_detail = detail;
        self
    }

    /// Load from a JSON object such as `{"overflow_detail": "range"}`
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compat() {
        assert_eq!(RenderOptions::default().overflow_detail, OverflowDetail::Compat);
    }

    #[test]
    fn test_from_json() {
        let options = RenderOptions::from_json_str(r#"{"overflow_detail": "range"}"#).unwrap();
        assert_eq!(options.overflow_detail, OverflowDetail::Range);

        let options = RenderOptions::from_json_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = RenderOptions::from_json_str(r#"{"overflow_detail": "verbose"}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));

        let err = RenderOptions::from_json_str(r#"{"colour": true}"#).unwrap_err();
        assert!(err.to_string().starts_with("CONFIG/"));
    }
}
