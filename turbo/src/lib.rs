pub mod validation;

pub mod prelude {
    pub use crate::validation::{
        ConfigError, DefectPolicy, ErrorDisplay, ErrorRecord, FieldInput, FieldValue, FormInput,
        FormPresenter, MessageTable, Rule, RuleRegistry, RuleSpec, ValidationOutcome, Validator,
        ValidatorSettings, parse_rules, with_rules,
    };
}
