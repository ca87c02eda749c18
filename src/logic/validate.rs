use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A validation failure tied to a single form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// One step in a field's rule chain. Transforms rewrite the value,
/// assertions record a [`FieldError`] and leave it unchanged.
#[derive(Debug, Clone)]
enum Rule {
    Trim,
    Escape,
    NonEmpty { message: &'static str },
    Alphanumeric { message: &'static str },
}

/// An ordered rule chain for one field.
#[derive(Debug, Clone)]
pub struct FieldRules {
    field: &'static str,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Strip leading and trailing whitespace.
    pub fn trim(mut self) -> Self {
        self.rules.push(Rule::Trim);
        self
    }

    /// Replace markup-significant characters with HTML entities.
    pub fn escape(mut self) -> Self {
        self.rules.push(Rule::Escape);
        self
    }

    /// Assert the value is non-empty at this point in the chain.
    pub fn non_empty(mut self, message: &'static str) -> Self {
        self.rules.push(Rule::NonEmpty { message });
        self
    }

    /// Assert the value contains only ASCII letters and digits at this
    /// point in the chain. The empty string passes; pair with
    /// [`FieldRules::non_empty`] for required fields.
    pub fn alphanumeric(mut self, message: &'static str) -> Self {
        self.rules.push(Rule::Alphanumeric { message });
        self
    }

    fn apply(&self, raw: &str, errors: &mut Vec<FieldError>) -> String {
        let mut value = raw.to_string();
        for rule in &self.rules {
            match rule {
                Rule::Trim => value = value.trim().to_string(),
                Rule::Escape => value = escape_html(&value),
                Rule::NonEmpty { message } => {
                    if value.is_empty() {
                        errors.push(FieldError::new(self.field, message));
                    }
                }
                Rule::Alphanumeric { message } => {
                    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
                        errors.push(FieldError::new(self.field, message));
                    }
                }
            }
        }
        value
    }
}

/// Result of running a [`FormValidator`]: the sanitized value set plus
/// every error message collected across all fields, in declaration order.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub values: HashMap<String, String>,
    pub errors: Vec<FieldError>,
}

impl ValidationOutcome {
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// An ordered list of per-field rule chains. Every field runs; a failing
/// assertion never short-circuits the remaining rules or fields.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    fields: Vec<FieldRules>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    /// Run the pipeline over raw form values. Fields absent from `raw`
    /// are treated as empty strings.
    pub fn run(&self, raw: &[(&str, &str)]) -> ValidationOutcome {
        let mut values = HashMap::new();
        let mut errors = Vec::new();
        for rules in &self.fields {
            let input = raw
                .iter()
                .find(|(field, _)| *field == rules.field)
                .map(|(_, value)| *value)
                .unwrap_or("");
            let sanitized = rules.apply(input, &mut errors);
            values.insert(rules.field.to_string(), sanitized);
        }
        ValidationOutcome { values, errors }
    }
}

/// Escape the characters that carry meaning in HTML.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_rules() -> FieldRules {
        FieldRules::new("name")
            .trim()
            .non_empty("Name must be specified.")
            .escape()
            .alphanumeric("Name has non-alphanumeric characters.")
    }

    #[test]
    fn trims_and_passes_a_clean_value() {
        let outcome = FormValidator::new()
            .field(name_rules())
            .run(&[("name", "Trek ")]);
        assert!(outcome.is_valid());
        assert_eq!(outcome.value("name"), "Trek");
    }

    #[test]
    fn empty_after_trim_is_rejected() {
        let outcome = FormValidator::new()
            .field(name_rules())
            .run(&[("name", "   ")]);
        assert_eq!(
            outcome.errors,
            vec![FieldError::new("name", "Name must be specified.")]
        );
        assert_eq!(outcome.value("name"), "");
    }

    #[test]
    fn missing_field_is_treated_as_empty() {
        let outcome = FormValidator::new().field(name_rules()).run(&[]);
        assert!(!outcome.is_valid());
    }

    #[test]
    fn markup_is_escaped_then_fails_the_alphanumeric_check() {
        let outcome = FormValidator::new()
            .field(name_rules())
            .run(&[("name", "Trek<script>")]);
        assert_eq!(outcome.value("name"), "Trek&lt;script&gt;");
        assert_eq!(
            outcome.errors,
            vec![FieldError::new(
                "name",
                "Name has non-alphanumeric characters."
            )]
        );
    }

    #[test]
    fn unconstrained_field_is_sanitized_but_never_rejected() {
        let outcome = FormValidator::new()
            .field(FieldRules::new("origin").trim().escape())
            .run(&[("origin", " USA<script> ")]);
        assert!(outcome.is_valid());
        assert_eq!(outcome.value("origin"), "USA&lt;script&gt;");
    }

    #[test]
    fn errors_collect_across_fields_in_declaration_order() {
        let outcome = FormValidator::new()
            .field(name_rules())
            .field(
                FieldRules::new("model")
                    .trim()
                    .non_empty("Model must be specified."),
            )
            .run(&[("name", ""), ("model", " ")]);
        assert_eq!(
            outcome.errors,
            vec![
                FieldError::new("name", "Name must be specified."),
                FieldError::new("model", "Model must be specified."),
            ]
        );
    }

    #[test]
    fn a_failing_assertion_does_not_stop_later_rules_on_the_same_field() {
        let rules = FieldRules::new("name")
            .trim()
            .alphanumeric("Name has non-alphanumeric characters.")
            .escape();
        let outcome = FormValidator::new().field(rules).run(&[("name", " < ")]);
        assert_eq!(
            outcome.errors,
            vec![FieldError::new(
                "name",
                "Name has non-alphanumeric characters."
            )]
        );
        // The escape transform still ran after the failed assertion.
        assert_eq!(outcome.value("name"), "&lt;");
    }

    #[test]
    fn escape_html_covers_the_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;"
        );
    }
}
