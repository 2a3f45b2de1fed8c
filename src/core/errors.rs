//! HDC-prefixed error types with structured error codes.

#![allow(missing_docs)]

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, HdcError>;

/// Top-level error type for the health dashboard core.
///
/// Degraded numeric input (absent, NaN, negative raw signals) is never
/// an error: normalization folds it to `0`. These variants cover
/// configuration problems, label parsing at serialization boundaries,
/// and admin lookups on missing records.
#[derive(Debug, Error)]
pub enum HdcError {
    #[error("[HDC-1001] invalid band configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[HDC-1002] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[HDC-2001] unknown tier label: {label}")]
    InvalidTier { label: String },

    #[error("[HDC-2002] unknown prediction type label: {label}")]
    InvalidPredictionType { label: String },

    #[error("[HDC-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[HDC-3001] user not found with id {user_id}")]
    UserNotFound { user_id: u64 },

    #[error("[HDC-3002] field {field} is not editable")]
    ImmutableField { field: &'static str },
}

impl HdcError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "HDC-1001",
            Self::ConfigParse { .. } => "HDC-1002",
            Self::InvalidTier { .. } => "HDC-2001",
            Self::InvalidPredictionType { .. } => "HDC-2002",
            Self::Serialization { .. } => "HDC-2101",
            Self::UserNotFound { .. } => "HDC-3001",
            Self::ImmutableField { .. } => "HDC-3002",
        }
    }

    /// Whether the failure indicates a caller/programming error rather
    /// than a bad record reaching the system at runtime.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidTier { .. } | Self::ImmutableField { .. })
    }
}

impl From<serde_json::Error> for HdcError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for HdcError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HdcError;

    #[test]
    fn codes_are_stable_and_embedded_in_messages() {
        let cases: [(HdcError, &str); 4] = [
            (
                HdcError::InvalidConfig {
                    details: "probability cutoffs out of order".to_string(),
                },
                "HDC-1001",
            ),
            (
                HdcError::InvalidTier {
                    label: "critical".to_string(),
                },
                "HDC-2001",
            ),
            (HdcError::UserNotFound { user_id: 42 }, "HDC-3001"),
            (HdcError::ImmutableField { field: "email" }, "HDC-3002"),
        ];
        for (error, code) in cases {
            assert_eq!(error.code(), code);
            assert!(error.to_string().contains(code), "message: {error}");
        }
    }

    #[test]
    fn tier_parse_failures_are_caller_errors() {
        let error = HdcError::InvalidTier {
            label: "severe".to_string(),
        };
        assert!(error.is_caller_error());
        let error = HdcError::UserNotFound { user_id: 7 };
        assert!(!error.is_caller_error());
    }
}
