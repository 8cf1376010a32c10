use crate::domain::model::{FormField, FormInput, ValidationResult};
use crate::utils::validation::validate_url;
use std::collections::BTreeMap;

pub const INVALID_LINK_MESSAGE: &str = "Please provide a valid image URL";

struct LengthRule {
    field: FormField,
    min: usize,
    max: Option<usize>,
}

const RULES: [LengthRule; 4] = [
    LengthRule {
        field: FormField::Title,
        min: 3,
        max: Some(100),
    },
    LengthRule {
        field: FormField::Description,
        min: 20,
        max: Some(500),
    },
    LengthRule {
        field: FormField::Category,
        min: 3,
        max: Some(20),
    },
    LengthRule {
        field: FormField::Pitch,
        min: 10,
        max: None,
    },
];

impl LengthRule {
    /// First failing check wins: required, then too short, then too long.
    /// Emptiness is judged on the trimmed value, lengths on the raw one.
    fn check(&self, value: &str) -> Option<String> {
        let label = self.field.label();

        if value.trim().is_empty() {
            return Some(format!("{} is required", label));
        }

        // UTF-16 code units, matching the length browsers report for form input
        let len = value.encode_utf16().count();
        if len < self.min {
            return Some(format!("{} must be at least {} characters", label, self.min));
        }

        match self.max {
            Some(max) if len > max => Some(format!("{} must not exceed {} characters", label, max)),
            _ => None,
        }
    }
}

fn field_value(input: &FormInput, field: FormField) -> &str {
    match field {
        FormField::Title => &input.title,
        FormField::Description => &input.description,
        FormField::Category => &input.category,
        FormField::Pitch => &input.pitch,
        FormField::Link => input.link.as_deref().unwrap_or_default(),
    }
}

/// Check every field of a submission and collect one message per failing field.
pub fn validate(input: &FormInput) -> ValidationResult {
    let mut errors = BTreeMap::new();

    for rule in &RULES {
        if let Some(message) = rule.check(field_value(input, rule.field)) {
            errors.insert(rule.field, message);
        }
    }

    // A blank link is treated as not provided.
    if let Some(link) = input.link.as_deref().filter(|l| !l.trim().is_empty()) {
        if validate_url("link", link.trim()).is_err() {
            errors.insert(FormField::Link, INVALID_LINK_MESSAGE.to_string());
        }
    }

    if !errors.is_empty() {
        tracing::debug!(failed_fields = errors.len(), "submission failed validation");
    }

    ValidationResult::from_errors(errors)
}
