use indexmap::IndexMap;

use super::error::ConfigError;

/// The message for a field's first failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Fully interpolated error message.
    pub message: String,
}

impl ErrorRecord {
    /// Create a new error record.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Result of validating a form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    /// Errors for fields that failed, in form order.
    pub field_errors: IndexMap<String, ErrorRecord>,
    /// Fields skipped because their rules are defective.
    ///
    /// Only filled under [`DefectPolicy::Collect`](super::DefectPolicy::Collect).
    pub defects: IndexMap<String, ConfigError>,
}

impl ValidationOutcome {
    /// Check if no field failed validation.
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Check if any field was skipped because of a defect.
    pub fn has_defects(&self) -> bool {
        !self.defects.is_empty()
    }

    /// Error for a field, if it failed.
    pub fn error(&self, field: &str) -> Option<&ErrorRecord> {
        self.field_errors.get(field)
    }

    /// The first failed field and its error.
    pub fn first_error(&self) -> Option<(&str, &ErrorRecord)> {
        self.field_errors
            .first()
            .map(|(name, record)| (name.as_str(), record))
    }
}
