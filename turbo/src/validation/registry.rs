//! Rule registry: rule names bound to predicates and message templates.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::error::ConfigError;
use super::rule::RuleSpec;
use super::settings::MessageTable;
use super::value::FieldValue;

/// Placeholder replaced by the rule parameter.
pub const ADDITIONAL_VALUE: &str = "{additionalValue}";
/// Placeholder replaced by the display name.
pub const FIELD_NAME: &str = "{fieldName}";

/// Signature of a rule predicate: `(value, parameter) -> passes`.
///
/// Returning `Err` means the rule itself is misconfigured (for example a
/// non-numeric limit), not that the value is invalid.
pub type Predicate = dyn Fn(&FieldValue, &str) -> Result<bool, ConfigError> + Send + Sync;

/// A validation rule: a predicate and the message shown when it fails.
///
/// The two always travel together, so a registry can never hold a template
/// without a predicate or the other way round.
pub struct Rule {
    template: String,
    predicate: Box<Predicate>,
}

impl Rule {
    /// Create a rule from an infallible predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use turbo::validation::{FieldValue, Rule};
    ///
    /// let even = Rule::new("Pole {fieldName} musí byť párne", |v: &FieldValue, _: &str| {
    ///     v.as_number().is_some_and(|n| n % 2.0 == 0.0)
    /// });
    /// assert!(even.check(&FieldValue::from(4), "").unwrap());
    /// ```
    pub fn new<F>(template: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FieldValue, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            template: template.into(),
            predicate: Box::new(move |v, p| Ok(predicate(v, p))),
        }
    }

    /// Create a rule whose predicate can reject its parameter.
    pub fn fallible<F>(template: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FieldValue, &str) -> Result<bool, ConfigError> + Send + Sync + 'static,
    {
        Self {
            template: template.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The message template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replace the message template, keeping the predicate.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Run the predicate.
    pub fn check(&self, value: &FieldValue, parameter: &str) -> Result<bool, ConfigError> {
        (self.predicate)(value, parameter)
    }

    /// Build the error message for a failed `spec`.
    ///
    /// Only the first occurrence of each placeholder is replaced.
    pub fn message(&self, spec: &RuleSpec) -> String {
        let mut message = self.template.clone();
        if message.contains(ADDITIONAL_VALUE) {
            message = message.replacen(ADDITIONAL_VALUE, &spec.parameter, 1);
        }
        if message.contains(FIELD_NAME) {
            message = message.replacen(FIELD_NAME, &spec.display_name, 1);
        }
        message
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

/// Named validation rules.
///
/// Build one at startup, register any custom rules, then hand it to a
/// [`Validator`](super::Validator). Validation only reads the registry.
///
/// # Example
///
/// ```
/// use turbo::validation::{FieldValue, Rule, RuleRegistry};
///
/// let mut registry = RuleRegistry::with_builtins();
/// registry.register("even", Rule::new("Číslo musí byť párne", |v: &FieldValue, _: &str| {
///     v.as_number().is_some_and(|n| n % 2.0 == 0.0)
/// }));
///
/// assert!(registry.contains("required"));
/// assert!(registry.contains("even"));
/// ```
#[derive(Debug)]
pub struct RuleRegistry {
    rules: IndexMap<String, Rule>,
}

impl RuleRegistry {
    /// Create a registry with no rules.
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Create a registry holding the built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for (name, rule) in builtin_rules() {
            registry.register(name, rule);
        }
        registry
    }

    /// Apply message overrides, consuming the registry.
    pub fn with_messages(mut self, messages: &MessageTable) -> Result<Self, ConfigError> {
        self.apply_messages(messages)?;
        Ok(self)
    }

    /// Register a rule, replacing any rule with the same name.
    ///
    /// Returns the replaced rule, if any.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        let name = name.into();
        log::debug!("Registering rule '{}'", name);
        self.rules.insert(name, rule)
    }

    /// Remove a rule.
    pub fn unregister(&mut self, name: &str) -> Option<Rule> {
        self.rules.shift_remove(name)
    }

    /// Replace the message template of a registered rule.
    pub fn set_template(
        &mut self,
        name: &str,
        template: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let rule = self
            .rules
            .get_mut(name)
            .ok_or_else(|| ConfigError::unknown_rule(name))?;
        rule.set_template(template);
        Ok(())
    }

    /// Replace templates for every rule named in `messages`.
    ///
    /// Nothing is changed if any name is unknown.
    pub fn apply_messages(&mut self, messages: &MessageTable) -> Result<(), ConfigError> {
        if let Some(unknown) = messages.names().find(|name| !self.contains(name)) {
            return Err(ConfigError::unknown_rule(unknown));
        }
        for (name, template) in messages.iter() {
            self.set_template(name, template)?;
        }
        Ok(())
    }

    /// Look up a rule.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Look up a rule, treating a missing one as a defect.
    pub fn require(&self, name: &str) -> Result<&Rule, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::unknown_rule(name))
    }

    /// Check whether a rule is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the registry has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

// =============================================================================
// Built-in rules
// =============================================================================

/// RFC 5322-ish address pattern. Unanchored: it accepts any value that
/// contains an address.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])"#,
    )
    .expect("email pattern is valid")
});

/// Limits are taken as written; surrounding whitespace is rejected.
fn length_limit(rule: &str, parameter: &str) -> Result<usize, ConfigError> {
    parameter
        .parse()
        .map_err(|_| ConfigError::invalid_parameter(rule, parameter))
}

fn number_limit(rule: &str, parameter: &str) -> Result<f64, ConfigError> {
    parameter
        .parse::<f64>()
        .ok()
        .filter(|n| !n.is_nan())
        .ok_or_else(|| ConfigError::invalid_parameter(rule, parameter))
}

/// The rules every registry starts with.
fn builtin_rules() -> Vec<(&'static str, Rule)> {
    vec![
        (
            "required",
            Rule::new("Pole {fieldName} je povinné", |v, _| {
                v.as_text() != Some("")
            }),
        ),
        (
            "string",
            Rule::new("Pole {fieldName} musí byť reťazec znakov", |v, _| {
                v.is_text()
            }),
        ),
        (
            "integer",
            Rule::new("Pole {fieldName} musí byť číslo", |v, _| v.is_number()),
        ),
        (
            "max",
            Rule::fallible(
                "Maximálna dĺžka pola {fieldName} je {additionalValue}",
                |v, p| {
                    let max = length_limit("max", p)?;
                    Ok(v.char_len().is_some_and(|len| len <= max))
                },
            ),
        ),
        (
            "min",
            Rule::fallible(
                "Minimálna dĺžka pola {fieldName} je {additionalValue}",
                |v, p| {
                    let min = length_limit("min", p)?;
                    Ok(v.char_len().is_some_and(|len| len >= min))
                },
            ),
        ),
        (
            "maxNum",
            Rule::fallible("Maximálne číslo je {additionalValue}", |v, p| {
                let max = number_limit("maxNum", p)?;
                Ok(v.as_number().is_some_and(|n| n <= max))
            }),
        ),
        (
            "minNum",
            Rule::fallible("Minimálne číslo je {additionalValue}", |v, p| {
                let min = number_limit("minNum", p)?;
                Ok(v.as_number().is_some_and(|n| n >= min))
            }),
        ),
        (
            "email",
            Rule::new(
                "Pole {fieldName} musí byť platná e-mailová adresa",
                |v, _| v.as_text().is_some_and(|s| EMAIL.is_match(s)),
            ),
        ),
    ]
}
