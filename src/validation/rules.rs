use std::collections::BTreeMap;

use crate::errors::validation_error::ValidationErrors;

/// A single validation predicate. Rules other than `Required` treat the empty
/// string as passing, so an empty field reports exactly the required-message.
pub enum Rule {
    Required,
    /// Bounds are counted in characters, not bytes.
    CharLength { min: usize, max: usize },
    PrintableAscii,
    ValidEmail,
}

impl Rule {
    pub fn is_satisfied(&self, value: &str) -> bool {
        if value.is_empty() && !matches!(self, Rule::Required) {
            return true;
        }

        match self {
            Rule::Required => !value.is_empty(),
            Rule::CharLength { min, max } => {
                let count = value.chars().count();
                *min <= count && count <= *max
            }
            Rule::PrintableAscii => value.chars().all(|c| (' '..='~').contains(&c)),
            Rule::ValidEmail => email_address::EmailAddress::is_valid(value),
        }
    }

    /// Bound parameters substituted into the rule's message template.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Rule::CharLength { min, max } => {
                vec![("min", min.to_string()), ("max", max.to_string())]
            }
            _ => Vec::new(),
        }
    }
}

/// Ordered (rule, message template) pairs for one field of a record.
pub struct FieldRules<T> {
    field: &'static str,
    value_of: fn(&T) -> &str,
    rules: Vec<(Rule, &'static str)>,
}

impl<T> FieldRules<T> {
    pub fn new(field: &'static str, value_of: fn(&T) -> &str) -> Self {
        FieldRules {
            field,
            value_of,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule, message: &'static str) -> Self {
        self.rules.push((rule, message));
        self
    }
}

/// A declarative ruleset over a record type. Evaluation visits every field;
/// within a field the first failing rule produces that field's message.
pub struct Ruleset<T> {
    fields: Vec<FieldRules<T>>,
}

impl<T> Ruleset<T> {
    pub fn new(fields: Vec<FieldRules<T>>) -> Self {
        Ruleset { fields }
    }

    pub fn validate(&self, record: &T) -> Result<(), ValidationErrors> {
        let mut errors: BTreeMap<&'static str, String> = BTreeMap::new();

        for field_rules in &self.fields {
            let value = (field_rules.value_of)(record);

            for (rule, template) in &field_rules.rules {
                if !rule.is_satisfied(value) {
                    errors.insert(field_rules.field, render_template(template, &rule.params()));
                    break;
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(errors))
        }
    }
}

/// Substitutes `{name}` tokens from `params` into `template`. Tokens without a
/// matching parameter are left in place.
pub fn render_template(template: &str, params: &[(&'static str, String)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let tail = &rest[open..];

        match tail.find('}') {
            Some(close) => {
                let token = &tail[1..close];
                match params.iter().find(|(name, _)| *name == token) {
                    Some((_, value)) => rendered.push_str(value),
                    None => rendered.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
            }
            None => {
                rendered.push_str(tail);
                rest = "";
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

#[cfg(test)]
mod tests {
    use super::{FieldRules, Rule, Ruleset, render_template};

    #[test]
    fn required_rejects_empty_only() {
        assert!(!Rule::Required.is_satisfied(""));
        assert!(Rule::Required.is_satisfied(" "));
        assert!(Rule::Required.is_satisfied("a"));
    }

    #[test]
    fn char_length_counts_characters_not_bytes() {
        let rule = Rule::CharLength { min: 5, max: 20 };
        // 5 Japanese characters, 15 bytes in UTF-8
        assert!(rule.is_satisfied("こんにちは"));
        assert!(!rule.is_satisfied("こんに"));
    }

    #[test]
    fn char_length_boundaries_are_inclusive() {
        let rule = Rule::CharLength { min: 5, max: 20 };
        assert!(!rule.is_satisfied(&"a".repeat(4)));
        assert!(rule.is_satisfied(&"a".repeat(5)));
        assert!(rule.is_satisfied(&"a".repeat(20)));
        assert!(!rule.is_satisfied(&"a".repeat(21)));
    }

    #[test]
    fn printable_ascii_rejects_controls_and_non_ascii() {
        assert!(Rule::PrintableAscii.is_satisfied("Alice Doe ~!"));
        assert!(!Rule::PrintableAscii.is_satisfied("たろう"));
        assert!(!Rule::PrintableAscii.is_satisfied("tab\there"));
    }

    #[test]
    fn valid_email_accepts_ordinary_addresses() {
        assert!(Rule::ValidEmail.is_satisfied("alice@example.com"));
        assert!(!Rule::ValidEmail.is_satisfied("not-an-email"));
        assert!(!Rule::ValidEmail.is_satisfied("@example.com"));
    }

    #[test]
    fn non_required_rules_skip_empty_values() {
        assert!(Rule::CharLength { min: 5, max: 20 }.is_satisfied(""));
        assert!(Rule::PrintableAscii.is_satisfied(""));
        assert!(Rule::ValidEmail.is_satisfied(""));
    }

    #[test]
    fn render_template_substitutes_known_tokens() {
        let params = vec![("min", "5".to_string()), ("max", "20".to_string())];
        assert_eq!(
            render_template("between {min} and {max} characters", &params),
            "between 5 and 20 characters"
        );
    }

    #[test]
    fn render_template_leaves_unknown_tokens_in_place() {
        let params = vec![("min", "5".to_string())];
        assert_eq!(render_template("{min} {what}", &params), "5 {what}");
    }

    #[test]
    fn render_template_passes_through_plain_text_and_stray_braces() {
        assert_eq!(render_template("no tokens here", &[]), "no tokens here");
        assert_eq!(render_template("dangling {brace", &[]), "dangling {brace");
    }

    #[test]
    fn render_template_handles_non_ascii_between_tokens() {
        let params = vec![("min", "5".to_string()), ("max", "40".to_string())];
        assert_eq!(render_template("{min}～{max} 文字", &params), "5～40 文字");
    }

    struct Record {
        first: String,
        second: String,
    }

    fn record_ruleset() -> Ruleset<Record> {
        Ruleset::new(vec![
            FieldRules::new("first", |r: &Record| r.first.as_str())
                .rule(Rule::Required, "first is required")
                .rule(Rule::CharLength { min: 2, max: 4 }, "first must be {min}-{max}"),
            FieldRules::new("second", |r: &Record| r.second.as_str())
                .rule(Rule::Required, "second is required"),
        ])
    }

    #[test]
    fn validate_passes_a_conforming_record() {
        let record = Record {
            first: "abc".to_string(),
            second: "x".to_string(),
        };
        assert!(record_ruleset().validate(&record).is_ok());
    }

    #[test]
    fn validate_reports_every_failing_field() {
        let record = Record {
            first: String::new(),
            second: String::new(),
        };
        let errors = record_ruleset().validate(&record).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("first"), Some("first is required"));
        assert_eq!(errors.get("second"), Some("second is required"));
    }

    #[test]
    fn validate_stops_at_the_first_failing_rule_per_field() {
        // Empty field: the required rule wins, the length rule never fires.
        let record = Record {
            first: String::new(),
            second: "x".to_string(),
        };
        let errors = record_ruleset().validate(&record).unwrap_err();
        assert_eq!(errors.get("first"), Some("first is required"));

        let record = Record {
            first: "toolong".to_string(),
            second: "x".to_string(),
        };
        let errors = record_ruleset().validate(&record).unwrap_err();
        assert_eq!(errors.get("first"), Some("first must be 2-4"));
    }
}
