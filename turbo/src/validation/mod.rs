//! Rule-string form validation.
//!
//! Each field carries a rule string such as `required>E-mail|max:50>E-mail|email`.
//! The string is parsed into [`RuleSpec`]s, every rule is looked up in a
//! [`RuleRegistry`], and the first rule that fails produces the field's
//! error message. A [`Validator`] runs this over a whole form.
//!
//! Broken rule strings and unknown rule names are reported as
//! [`ConfigError`], never as a failed field.
//!
//! # Example
//!
//! ```
//! use turbo::validation::{FieldInput, FormInput, Validator};
//!
//! let validator = Validator::default();
//!
//! let mut form = FormInput::new();
//! form.insert("email".into(), FieldInput::new("jana@example", "required>E-mail|email>E-mail"));
//! form.insert("nick".into(), FieldInput::new("jn", "min:3>Prezývka"));
//!
//! let outcome = validator.validate_form(&form, true).unwrap();
//! assert_eq!(outcome.field_errors.len(), 1);
//! assert!(outcome.error("email").is_some());
//! assert!(outcome.error("nick").is_none());
//! ```

mod error;
mod form;
mod presenter;
mod registry;
mod result;
mod rule;
mod settings;
mod validator;
mod value;

pub use error::ConfigError;
pub use form::{FieldInput, FormInput, with_rules};
pub use presenter::FormPresenter;
pub use registry::{ADDITIONAL_VALUE, FIELD_NAME, Predicate, Rule, RuleRegistry};
pub use result::{ErrorRecord, ValidationOutcome};
pub use rule::{
    DISPLAY_DELIMITER, PARAM_DELIMITER, RULE_SEPARATOR, RuleSpec, format_rules, parse_rules,
};
pub use settings::{DefectPolicy, ErrorDisplay, MessageTable, ValidatorSettings};
pub use validator::Validator;
pub use value::FieldValue;
