//! Field and form validation.

use indexmap::IndexMap;
use log::{debug, trace, warn};

use super::error::ConfigError;
use super::form::{FieldInput, FormInput, with_rules};
use super::presenter::FormPresenter;
use super::registry::RuleRegistry;
use super::result::{ErrorRecord, ValidationOutcome};
use super::rule::{RuleSpec, parse_rules};
use super::settings::{DefectPolicy, ValidatorSettings};
use super::value::FieldValue;

/// Validates fields against rule strings.
///
/// # Example
///
/// ```
/// use turbo::validation::{FieldInput, FormInput, Validator};
///
/// let validator = Validator::default();
///
/// let mut form = FormInput::new();
/// form.insert("name".into(), FieldInput::new("", "required>Meno|max:20>Meno"));
/// form.insert("age".into(), FieldInput::new(17, "integer|minNum:18"));
///
/// let outcome = validator.validate_form(&form, false).unwrap();
/// assert!(!outcome.is_valid());
/// assert_eq!(outcome.field_errors["name"].message, "Pole Meno je povinné");
/// assert_eq!(outcome.field_errors["age"].message, "Minimálne číslo je 18");
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    registry: RuleRegistry,
    settings: ValidatorSettings,
}

impl Validator {
    /// Create a validator.
    ///
    /// Message overrides from `settings` are applied to `registry` here; an
    /// override for an unregistered rule is a defect.
    pub fn new(mut registry: RuleRegistry, settings: ValidatorSettings) -> Result<Self, ConfigError> {
        registry.apply_messages(&settings.messages)?;
        debug!(
            "Validator ready with {} rules ({:?})",
            registry.len(),
            settings.defect_policy
        );
        Ok(Self { registry, settings })
    }

    /// The rule registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// The settings.
    pub fn settings(&self) -> &ValidatorSettings {
        &self.settings
    }

    /// Validate one field.
    ///
    /// Returns the message for the first failed rule, or `None` if every
    /// rule passes. Rules after the first failure are not evaluated.
    pub fn validate_field(
        &self,
        name: &str,
        input: &FieldInput,
    ) -> Result<Option<ErrorRecord>, ConfigError> {
        let Some(rules) = input.rule_string() else {
            return Ok(None);
        };
        let specs = parse_rules(rules)?;
        self.check(name, &input.value, &specs)
    }

    /// Validate a value against already parsed rules.
    ///
    /// Every rule name is resolved before any predicate runs, so an unknown
    /// rule is reported even when an earlier rule would fail.
    pub fn check(
        &self,
        name: &str,
        value: &FieldValue,
        specs: &[RuleSpec],
    ) -> Result<Option<ErrorRecord>, ConfigError> {
        let mut resolved = Vec::with_capacity(specs.len());
        for spec in specs {
            resolved.push((spec, self.registry.require(&spec.name)?));
        }

        for (spec, rule) in resolved {
            let passed = rule.check(value, &spec.parameter)?;
            trace!("Field '{}' rule '{}' passed: {}", name, spec, passed);
            if !passed {
                return Ok(Some(ErrorRecord::new(rule.message(spec))));
            }
        }

        Ok(None)
    }

    /// Validate every field of a form, in order.
    ///
    /// Fields without rules are skipped. With `stop_after_first`, the pass
    /// ends at the first invalid field and later fields are not checked.
    /// Defective rules abort the pass or are collected, depending on
    /// [`DefectPolicy`].
    pub fn validate_form(
        &self,
        form: &FormInput,
        stop_after_first: bool,
    ) -> Result<ValidationOutcome, ConfigError> {
        let mut outcome = ValidationOutcome::default();

        for (name, input) in form {
            if input.rule_string().is_none() {
                continue;
            }

            match self.validate_field(name, input) {
                Ok(None) => {}
                Ok(Some(record)) => {
                    outcome.field_errors.insert(name.clone(), record);
                    if stop_after_first {
                        debug!("Stopping after first invalid field '{}'", name);
                        break;
                    }
                }
                Err(err) => {
                    warn!("Defective rules for field '{}': {}", name, err);
                    match self.settings.defect_policy {
                        DefectPolicy::Abort => return Err(err.in_field(name.as_str())),
                        DefectPolicy::Collect => {
                            outcome.defects.insert(name.clone(), err);
                        }
                    }
                }
            }
        }

        debug!(
            "Validated {} fields: {} invalid, {} defective",
            form.len(),
            outcome.field_errors.len(),
            outcome.defects.len()
        );

        Ok(outcome)
    }

    /// Run a full validation cycle against a presenter.
    ///
    /// Clears old errors, collects values, pairs them with `rules`,
    /// validates, and renders the errors if the form is invalid and
    /// rendering is enabled.
    pub fn validate_and_present<P: FormPresenter + ?Sized>(
        &self,
        presenter: &mut P,
        rules: &IndexMap<String, String>,
        stop_after_first: bool,
    ) -> Result<ValidationOutcome, ConfigError> {
        presenter.clear_errors();

        let form = with_rules(presenter.collect(), rules);
        let outcome = self.validate_form(&form, stop_after_first)?;

        if outcome.is_invalid() && self.settings.show_errors {
            presenter.show_errors(&outcome.field_errors, self.settings.error_display);
        }

        Ok(outcome)
    }
}
