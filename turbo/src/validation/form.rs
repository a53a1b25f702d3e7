//! Form input: field values paired with their rule strings.

use indexmap::IndexMap;

use super::value::FieldValue;

/// One field to validate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldInput {
    /// Current value.
    pub value: FieldValue,
    /// Rule string. `None` or `Some("")` means no rules.
    pub rules: Option<String>,
}

impl FieldInput {
    /// Create a field with rules.
    pub fn new(value: impl Into<FieldValue>, rules: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            rules: Some(rules.into()),
        }
    }

    /// Create a field without rules.
    pub fn unchecked(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            rules: None,
        }
    }

    /// The rule string, if there is a non-empty one.
    pub fn rule_string(&self) -> Option<&str> {
        self.rules.as_deref().filter(|r| !r.is_empty())
    }
}

/// Fields to validate, in the order they appear in the form.
pub type FormInput = IndexMap<String, FieldInput>;

/// Pair collected form values with a rule table.
///
/// The result keeps the order of `form_data`. Fields with no entry in
/// `rules` are carried along without rules; rule entries for fields missing
/// from the form are ignored.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use turbo::validation::{FieldValue, with_rules};
///
/// let mut data = IndexMap::new();
/// data.insert("email".to_string(), FieldValue::from("jana@example.sk"));
/// data.insert("note".to_string(), FieldValue::from(""));
///
/// let mut rules = IndexMap::new();
/// rules.insert("email".to_string(), "required|email".to_string());
///
/// let form = with_rules(data, &rules);
/// assert_eq!(form["email"].rule_string(), Some("required|email"));
/// assert_eq!(form["note"].rule_string(), None);
/// ```
pub fn with_rules(
    form_data: IndexMap<String, FieldValue>,
    rules: &IndexMap<String, String>,
) -> FormInput {
    form_data
        .into_iter()
        .map(|(name, value)| {
            let rules = rules.get(&name).cloned();
            (name, FieldInput { value, rules })
        })
        .collect()
}
