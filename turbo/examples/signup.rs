//! Validates a sign-up form and prints the errors a page would render.
//!
//! Run with `cargo run --example signup`.

use indexmap::IndexMap;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use turbo::prelude::*;

/// A form held in memory, rendering errors to stdout.
struct ConsoleForm {
    values: IndexMap<String, FieldValue>,
    labels: IndexMap<String, String>,
}

impl ConsoleForm {
    fn new() -> Self {
        Self {
            values: IndexMap::new(),
            labels: IndexMap::new(),
        }
    }

    fn field(mut self, name: &str, label: &str, value: impl Into<FieldValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self.labels.insert(name.to_string(), label.to_string());
        self
    }
}

impl FormPresenter for ConsoleForm {
    fn collect(&self) -> IndexMap<String, FieldValue> {
        self.values.clone()
    }

    fn show_errors(&mut self, errors: &IndexMap<String, ErrorRecord>, display: ErrorDisplay) {
        for (name, error) in errors {
            let Some(label) = self.labels.get(name) else {
                continue;
            };
            match display {
                ErrorDisplay::AfterLabel => println!("  {} ({}): {}", label, name, error),
                ErrorDisplay::BelowInput => {
                    println!("  [{}] {}", name, self.values[name]);
                    println!("    {}", error);
                }
            }
        }
    }

    fn clear_errors(&mut self) {
        println!("-- clearing errors");
    }
}

fn main() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger unavailable: {}", e);
    }

    let mut registry = RuleRegistry::with_builtins();
    registry.register(
        "agree",
        Rule::new("Musíte súhlasiť s podmienkami", |v: &FieldValue, _: &str| {
            v.as_text() == Some("yes")
        }),
    );

    let settings = ValidatorSettings::new().error_display(ErrorDisplay::AfterLabel);
    let validator = match Validator::new(registry, settings) {
        Ok(validator) => validator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let mut rules = IndexMap::new();
    rules.insert("name".to_string(), "required>Meno|max:20>Meno".to_string());
    rules.insert("email".to_string(), "required>E-mail|email>E-mail".to_string());
    rules.insert("age".to_string(), "integer>Vek|minNum:18".to_string());
    rules.insert("terms".to_string(), "agree".to_string());

    let mut form = ConsoleForm::new()
        .field("name", "Meno", "Jana")
        .field("email", "E-mail", "jana(at)example.sk")
        .field("age", "Vek", 16)
        .field("terms", "Podmienky", "no");

    match validator.validate_and_present(&mut form, &rules, false) {
        Ok(outcome) if outcome.is_valid() => println!("Form is valid"),
        Ok(outcome) => println!("{} field(s) invalid", outcome.field_errors.len()),
        Err(e) => eprintln!("Error: {}", e),
    }
}
