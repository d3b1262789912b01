use crate::{error::PlannerError, Result};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Compile a Draft 7 validator, keeping the failure as text.
pub(crate) fn compile_validator(schema: &Value) -> std::result::Result<JSONSchema, String> {
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|err| err.to_string())
}

/// Run a compiled validator, reporting at most a few errors.
pub(crate) fn check_payload(schema_name: &str, validator: &JSONSchema, payload: &Value) -> Result<()> {
    let errors = match validator.validate(payload) {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let mut details: Vec<String> = errors
        .take(MAX_SCHEMA_ERRORS + 1)
        .map(|error| {
            let path = error.instance_path.to_string();
            let location = if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            };
            format!("{}: {}", location, error)
        })
        .collect();

    let truncated = details.len() > MAX_SCHEMA_ERRORS;
    details.truncate(MAX_SCHEMA_ERRORS);
    if details.is_empty() {
        details.push("payload failed schema validation".to_string());
    }
    if truncated {
        details.push("additional errors truncated".to_string());
    }

    Err(PlannerError::Validation(format!(
        "Payload does not match `{}` schema: {}",
        schema_name,
        details.join("; ")
    )))
}

#[cfg(test)]
mod tests {
    use crate::schemas::PayloadSchema;
    use crate::types::TripPlan;
    use serde_json::json;

    #[test]
    fn test_rejects_payload_missing_required_fields() {
        let err = TripPlan::schema()
            .validate(&json!({ "summary": {} }))
            .unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("TripPlan"));
    }

    #[test]
    fn test_rejects_non_object_payload() {
        let err = TripPlan::schema().validate(&json!("not a plan")).unwrap_err();
        assert!(err.to_string().contains("<root>"));
    }

    #[test]
    fn test_many_errors_are_truncated() {
        let err = TripPlan::schema()
            .validate(&json!({
                "summary": 1,
                "daily_schedule": 2,
                "budget_breakdown": 3,
                "accommodation_plan": 4,
                "group_arrangements": 5
            }))
            .unwrap_err();
        assert!(err.to_string().ends_with("additional errors truncated"));
    }
}
