//! Configuration defects.
//!
//! A value failing a rule is not an error; it ends up as an
//! [`ErrorRecord`](super::ErrorRecord) in the outcome. The types here are for
//! rule strings and registries that are themselves broken.

use thiserror::Error;

/// A defect in the validation rules, as opposed to invalid user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A rule token does not follow the `name:param>Display` grammar.
    #[error("Malformed rule '{token}': {reason}")]
    MalformedRule {
        /// The offending token.
        token: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A rule string references a rule that is not registered.
    #[error("Rule '{rule}' is not registered")]
    UnknownRule {
        /// The unknown rule name.
        rule: String,
    },

    /// A rule received a parameter it cannot use.
    #[error("Rule '{rule}' got invalid parameter '{parameter}'")]
    InvalidParameter {
        /// The rule name.
        rule: String,
        /// The parameter as written in the rule string.
        parameter: String,
    },

    /// A defect found while validating a specific field.
    #[error("Field '{field}': {source}")]
    Field {
        /// The field whose rules are defective.
        field: String,
        /// The underlying defect.
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// Creates a new malformed rule error.
    pub fn malformed(token: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedRule {
            token: token.into(),
            reason,
        }
    }

    /// Creates a new unknown rule error.
    pub fn unknown_rule(rule: impl Into<String>) -> Self {
        Self::UnknownRule { rule: rule.into() }
    }

    /// Creates a new invalid parameter error.
    pub fn invalid_parameter(rule: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::InvalidParameter {
            rule: rule.into(),
            parameter: parameter.into(),
        }
    }

    /// Attach the name of the field whose rules caused this defect.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// The defect without any field context.
    pub fn root(&self) -> &ConfigError {
        match self {
            Self::Field { source, .. } => source.root(),
            other => other,
        }
    }
}
