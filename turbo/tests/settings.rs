use turbo::validation::{DefectPolicy, ErrorDisplay, ValidatorSettings};

#[test]
fn test_defaults() {
    let settings = ValidatorSettings::default();
    assert_eq!(settings.defect_policy, DefectPolicy::Abort);
    assert!(settings.show_errors);
    assert_eq!(settings.error_display, ErrorDisplay::AfterLabel);
    assert!(settings.messages.is_empty());
}

#[test]
fn test_builder() {
    let settings = ValidatorSettings::new()
        .defect_policy(DefectPolicy::Collect)
        .show_errors(false)
        .error_display(ErrorDisplay::BelowInput)
        .message("required", "{fieldName} is required");

    assert_eq!(settings.defect_policy, DefectPolicy::Collect);
    assert!(!settings.show_errors);
    assert_eq!(settings.error_display, ErrorDisplay::BelowInput);
    assert_eq!(settings.messages.get("required"), Some("{fieldName} is required"));
}

#[test]
fn test_deserialize_partial_settings() {
    let settings: ValidatorSettings = serde_json::from_str(
        r#"{
            "defect_policy": "collect",
            "messages": { "min": "At least {additionalValue}" }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.defect_policy, DefectPolicy::Collect);
    assert!(settings.show_errors);
    assert_eq!(settings.error_display, ErrorDisplay::AfterLabel);
    assert_eq!(settings.messages.get("min"), Some("At least {additionalValue}"));
}

#[test]
fn test_deserialize_error_display() {
    let display: ErrorDisplay = serde_json::from_str(r#""below_input""#).unwrap();
    assert_eq!(display, ErrorDisplay::BelowInput);
}
