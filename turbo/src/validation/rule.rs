//! Rule string parsing.
//!
//! A rule string lists the rules for one field, separated by `|`:
//!
//! ```text
//! required>E-mail|max:50>E-mail|email
//! ```
//!
//! Each token is `name`, `name:param`, `name>Display` or
//! `name:param>Display`. The display name is what `{fieldName}` expands to
//! in the rule's error message.

use std::str::FromStr;

use super::error::ConfigError;

/// Separator between rules in a rule string.
pub const RULE_SEPARATOR: char = '|';
/// Separator between a rule name and its parameter.
pub const PARAM_DELIMITER: char = ':';
/// Separator introducing the display name.
pub const DISPLAY_DELIMITER: char = '>';

/// One parsed rule token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RuleSpec {
    /// Registered rule name.
    pub name: String,
    /// Parameter after `:` (empty if none).
    pub parameter: String,
    /// Display name after `>` (empty if none).
    pub display_name: String,
}

impl RuleSpec {
    /// Create a rule spec with no parameter or display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the parameter.
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = parameter.into();
        self
    }

    /// Set the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Parse a single rule token.
    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        if token.is_empty() {
            return Err(ConfigError::malformed(token, "empty rule"));
        }
        if token.matches(PARAM_DELIMITER).count() > 1 {
            return Err(ConfigError::malformed(token, "more than one ':'"));
        }
        if token.matches(DISPLAY_DELIMITER).count() > 1 {
            return Err(ConfigError::malformed(token, "more than one '>'"));
        }

        let colon = token.find(PARAM_DELIMITER);
        let arrow = token.find(DISPLAY_DELIMITER);

        let (name, parameter, display_name) = match (colon, arrow) {
            (Some(c), Some(a)) => {
                if a < c {
                    return Err(ConfigError::malformed(token, "'>' must come after ':'"));
                }
                (&token[..c], &token[c + 1..a], &token[a + 1..])
            }
            (Some(c), None) => (&token[..c], &token[c + 1..], ""),
            (None, Some(a)) => (&token[..a], "", &token[a + 1..]),
            (None, None) => (token, "", ""),
        };

        if name.is_empty() {
            return Err(ConfigError::malformed(token, "missing rule name"));
        }

        Ok(Self {
            name: name.to_string(),
            parameter: parameter.to_string(),
            display_name: display_name.to_string(),
        })
    }
}

impl FromStr for RuleSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.parameter.is_empty() {
            write!(f, "{}{}", PARAM_DELIMITER, self.parameter)?;
        }
        if !self.display_name.is_empty() {
            write!(f, "{}{}", DISPLAY_DELIMITER, self.display_name)?;
        }
        Ok(())
    }
}

/// Parse a full rule string into its rules, in order.
///
/// An empty string yields no rules.
pub fn parse_rules(rules: &str) -> Result<Vec<RuleSpec>, ConfigError> {
    if rules.is_empty() {
        return Ok(Vec::new());
    }
    rules.split(RULE_SEPARATOR).map(RuleSpec::parse).collect()
}

/// Render rules back into a rule string.
pub fn format_rules(rules: &[RuleSpec]) -> String {
    rules
        .iter()
        .map(RuleSpec::to_string)
        .collect::<Vec<_>>()
        .join(&RULE_SEPARATOR.to_string())
}
