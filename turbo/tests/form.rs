use indexmap::IndexMap;
use simplelog::{Config, LevelFilter, TestLogger};
use turbo::validation::{
    ConfigError, DefectPolicy, FieldInput, FieldValue, FormInput, RuleRegistry, Validator,
    ValidatorSettings, with_rules,
};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn form(fields: &[(&str, FieldInput)]) -> FormInput {
    fields
        .iter()
        .map(|(name, input)| (name.to_string(), input.clone()))
        .collect()
}

#[test]
fn test_valid_form() {
    init_logging();
    let input = form(&[
        ("name", FieldInput::new("Jana", "required|max:20")),
        ("email", FieldInput::new("jana@example.sk", "required|email")),
    ]);
    let outcome = Validator::default().validate_form(&input, false).unwrap();
    assert!(outcome.is_valid());
    assert!(outcome.field_errors.is_empty());
}

#[test]
fn test_all_errors_collected() {
    init_logging();
    let input = form(&[
        ("a", FieldInput::new("", "required>A")),
        ("ok", FieldInput::new("x", "required")),
        ("b", FieldInput::new("too long", "max:3>B")),
    ]);
    let outcome = Validator::default().validate_form(&input, false).unwrap();
    assert!(!outcome.is_valid());
    let names: Vec<_> = outcome.field_errors.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(outcome.field_errors["b"].message, "Maximálna dĺžka pola B je 3");
}

#[test]
fn test_stop_after_first() {
    init_logging();
    let input = form(&[
        ("a", FieldInput::new("", "required")),
        ("b", FieldInput::new("", "required")),
    ]);
    let outcome = Validator::default().validate_form(&input, true).unwrap();
    assert!(!outcome.is_valid());
    assert_eq!(outcome.field_errors.len(), 1);
    assert!(outcome.error("a").is_some());
    assert!(outcome.error("b").is_none());
}

#[test]
fn test_stop_after_first_follows_insertion_order() {
    init_logging();
    let input = form(&[
        ("b", FieldInput::new("", "required")),
        ("a", FieldInput::new("", "required")),
    ]);
    let outcome = Validator::default().validate_form(&input, true).unwrap();
    assert_eq!(outcome.first_error().map(|(name, _)| name), Some("b"));
}

#[test]
fn test_stop_after_first_skips_valid_fields() {
    init_logging();
    let input = form(&[
        ("ok", FieldInput::new("x", "required")),
        ("bad", FieldInput::new("", "required")),
        ("worse", FieldInput::new("", "required")),
    ]);
    let outcome = Validator::default().validate_form(&input, true).unwrap();
    let names: Vec<_> = outcome.field_errors.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["bad"]);
}

#[test]
fn test_fields_without_rules_are_skipped() {
    init_logging();
    let input = form(&[
        ("note", FieldInput::unchecked("")),
        ("empty", FieldInput::new("", "")),
    ]);
    let outcome = Validator::default().validate_form(&input, false).unwrap();
    assert!(outcome.is_valid());
}

#[test]
fn test_empty_form_is_valid() {
    init_logging();
    let outcome = Validator::default()
        .validate_form(&FormInput::new(), false)
        .unwrap();
    assert!(outcome.is_valid());
}

#[test]
fn test_defect_aborts_form_by_default() {
    init_logging();
    let input = form(&[
        ("a", FieldInput::new("", "required")),
        ("b", FieldInput::new("x", "nope")),
        ("c", FieldInput::new("", "required")),
    ]);
    let err = Validator::default().validate_form(&input, false).unwrap_err();
    match &err {
        ConfigError::Field { field, .. } => assert_eq!(field, "b"),
        other => panic!("expected field context, got {:?}", other),
    }
    assert_eq!(err.root(), &ConfigError::unknown_rule("nope"));
}

#[test]
fn test_defects_collected_when_configured() {
    init_logging();
    let settings = ValidatorSettings::new().defect_policy(DefectPolicy::Collect);
    let validator = Validator::new(RuleRegistry::with_builtins(), settings).unwrap();
    let input = form(&[
        ("a", FieldInput::new("", "required")),
        ("b", FieldInput::new("x", "max>3:B")),
        ("c", FieldInput::new("", "required")),
    ]);
    let outcome = validator.validate_form(&input, false).unwrap();

    assert!(outcome.has_defects());
    assert!(matches!(
        outcome.defects["b"],
        ConfigError::MalformedRule { .. }
    ));
    assert!(outcome.error("b").is_none());
    assert!(outcome.error("a").is_some());
    assert!(outcome.error("c").is_some());
}

#[test]
fn test_with_rules_keeps_form_order() {
    init_logging();
    let mut data = IndexMap::new();
    data.insert("z".to_string(), FieldValue::from(""));
    data.insert("a".to_string(), FieldValue::from(3));
    data.insert("m".to_string(), FieldValue::from("m"));

    let mut rules = IndexMap::new();
    rules.insert("a".to_string(), "integer".to_string());
    rules.insert("z".to_string(), "required".to_string());
    rules.insert("missing".to_string(), "required".to_string());

    let input = with_rules(data, &rules);
    let names: Vec<_> = input.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
    assert_eq!(input["z"].rule_string(), Some("required"));
    assert_eq!(input["a"].rule_string(), Some("integer"));
    assert_eq!(input["m"].rules, None);
    assert!(!input.contains_key("missing"));
}
