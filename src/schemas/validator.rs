use super::PayloadSchema;
use crate::{PlannerError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoding strategies for payloads read back from storage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validator {
    /// Fast decoding using serde, with the failing path in the error
    SerdeFirst,
    /// Check the payload against its JSON schema before decoding
    #[default]
    Strict,
}

impl Validator {
    /// Decode a raw JSON string into `T`
    pub fn decode<T: PayloadSchema>(&self, raw: &str) -> Result<T> {
        let schema = T::schema();
        match self {
            Validator::SerdeFirst => {
                let mut deserializer = serde_json::Deserializer::from_str(raw);
                serde_path_to_error::deserialize(&mut deserializer)
                    .map_err(|err| path_error(schema.schema_name(), err))
            }
            Validator::Strict => {
                let value: Value = serde_json::from_str(raw)?;
                schema.validate(&value)?;
                decode_value(schema.schema_name(), value)
            }
        }
    }
}

/// Decode an already-parsed value, reporting the failing path
pub fn decode_value<T: DeserializeOwned>(schema_name: &str, value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|err| path_error(schema_name, err))
}

fn path_error<E: std::fmt::Display>(
    schema_name: &str,
    err: serde_path_to_error::Error<E>,
) -> PlannerError {
    let path = err.path().to_string();
    let location = if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path
    };
    PlannerError::Validation(format!(
        "failed to decode `{}` at {}: {}",
        schema_name,
        location,
        err.inner()
    ))
}
