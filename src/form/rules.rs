use crate::{PlannerError, Result};

/// Required/length checks for a single text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldRules {
    pub const OPTIONAL: FieldRules = FieldRules {
        required: false,
        min_length: None,
        max_length: None,
    };

    /// Rules applied to required form fields: 2..=100 characters
    pub const REQUIRED_TEXT: FieldRules = FieldRules {
        required: true,
        min_length: Some(2),
        max_length: Some(100),
    };

    /// Check `value` and return its sanitized form. Empty optional fields pass as "".
    pub fn check(&self, field: &str, value: &str) -> Result<String> {
        let cleaned = sanitize(value);

        if cleaned.is_empty() {
            if self.required {
                return Err(PlannerError::invalid(format!("{} is required", field)));
            }
            return Ok(cleaned);
        }

        let length = cleaned.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(PlannerError::invalid(format!(
                    "{} must be at least {} characters",
                    field, min
                )));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Err(PlannerError::invalid(format!(
                    "{} cannot exceed {} characters",
                    field, max
                )));
            }
        }

        Ok(cleaned)
    }
}

/// Trim and drop angle brackets.
pub fn sanitize(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split a comma-delimited field, sanitizing entries and dropping blanks.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(sanitize)
        .filter(|item| !item.is_empty())
        .collect()
}
