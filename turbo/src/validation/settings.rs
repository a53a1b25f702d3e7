//! Validator configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What to do when a field's rules are defective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectPolicy {
    /// Abort the whole form pass with the first defect (default).
    #[default]
    Abort,
    /// Skip the defective field, record the defect and keep going.
    Collect,
}

/// Where a presenter should render error messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorDisplay {
    /// Insert the message after the input itself.
    BelowInput,
    /// Insert the message after the input's label, for layouts with
    /// floating placeholders where the label sits below the input (default).
    #[default]
    AfterLabel,
}

/// Message template overrides, keyed by rule name.
///
/// Deserializes from a plain map, so a table can be loaded from any serde
/// format:
///
/// ```
/// use turbo::validation::MessageTable;
///
/// let table = MessageTable::new()
///     .with("required", "{fieldName} is required")
///     .with("max", "{fieldName} is limited to {additionalValue} characters");
/// assert_eq!(table.get("required"), Some("{fieldName} is required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable(IndexMap<String, String>);

impl MessageTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template.
    pub fn with(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(rule, template);
        self
    }

    /// Add or replace a template.
    pub fn insert(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.0.insert(rule.into(), template.into());
    }

    /// Template for a rule.
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.0.get(rule).map(String::as_str)
    }

    /// Rule names with an override.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(rule, template)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Settings for a [`Validator`](super::Validator).
///
/// Built once and passed into the validator; there is no global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    /// How configuration defects are handled during a form pass.
    pub defect_policy: DefectPolicy,

    /// Whether `validate_and_present` renders errors at all.
    pub show_errors: bool,

    /// Where rendered errors go.
    pub error_display: ErrorDisplay,

    /// Template overrides applied to the registry when the validator is built.
    pub messages: MessageTable,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            defect_policy: DefectPolicy::Abort,
            show_errors: true,
            error_display: ErrorDisplay::default(),
            messages: MessageTable::new(),
        }
    }
}

impl ValidatorSettings {
    /// Create default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the defect policy.
    pub fn defect_policy(mut self, policy: DefectPolicy) -> Self {
        self.defect_policy = policy;
        self
    }

    /// Enable or disable rendering of errors.
    pub fn show_errors(mut self, show: bool) -> Self {
        self.show_errors = show;
        self
    }

    /// Set where errors are rendered.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    /// Override the message template of a rule.
    pub fn message(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(rule, template);
        self
    }
}
