use super::validation::{check_payload, compile_validator};
use crate::{PlannerError, Result};
use jsonschema::JSONSchema;
use schemars::{
    gen::SchemaGenerator,
    schema::{RootSchema, Schema},
    JsonSchema,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt;

/// Names and doc text captured from a payload type, usually by `#[payload_schema]`.
#[derive(Debug, Clone, Copy)]
pub struct PayloadDocs {
    /// Name reported in validation errors and used as the schema title
    pub name: &'static str,
    pub rust_type: &'static str,
    pub description: Option<&'static str>,
    /// `(serialized key, doc text)` per documented field
    pub fields: &'static [(&'static str, &'static str)],
}

impl PayloadDocs {
    /// Fill in title and descriptions the derive left empty.
    fn annotate(&self, root: &mut RootSchema) {
        let metadata = root.schema.metadata();
        metadata.title.get_or_insert_with(|| self.name.to_string());
        if let Some(description) = self.description {
            metadata
                .description
                .get_or_insert_with(|| description.to_string());
        }

        let Some(object) = root.schema.object.as_mut() else {
            return;
        };
        for (key, doc) in self.fields {
            if let Some(Schema::Object(property)) = object.properties.get_mut(*key) {
                property
                    .metadata()
                    .description
                    .get_or_insert_with(|| doc.to_string());
            }
        }
    }
}

/// JSON schema of a stored payload type, with its compiled validator.
///
/// Built once per type and kept for the life of the process, so loading a slot
/// never recompiles the schema.
pub struct SchemaHandle {
    docs: PayloadDocs,
    schema_json: Value,
    validator: std::result::Result<JSONSchema, String>,
}

impl SchemaHandle {
    pub fn for_type<T: JsonSchema>(docs: PayloadDocs) -> Self {
        let mut root = SchemaGenerator::default().into_root_schema_for::<T>();
        docs.annotate(&mut root);

        // A RootSchema is plain data; serializing it into a Value cannot fail.
        let schema_json = serde_json::to_value(&root).unwrap_or(Value::Null);
        let validator = compile_validator(&schema_json);

        Self {
            docs,
            schema_json,
            validator,
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.docs.name
    }

    pub fn type_name(&self) -> &'static str {
        self.docs.rust_type
    }

    pub fn schema_json(&self) -> &Value {
        &self.schema_json
    }

    /// Check a parsed payload against the schema.
    pub fn validate(&self, payload: &Value) -> Result<()> {
        match &self.validator {
            Ok(validator) => check_payload(self.docs.name, validator, payload),
            Err(reason) => Err(PlannerError::Validation(format!(
                "`{}` schema cannot be used for validation: {}",
                self.docs.name, reason
            ))),
        }
    }
}

impl fmt::Debug for SchemaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaHandle")
            .field("name", &self.docs.name)
            .field("rust_type", &self.docs.rust_type)
            .field("compiled", &self.validator.is_ok())
            .finish()
    }
}

/// A payload that can be written to and read back from a storage slot.
///
/// Implemented by `#[payload_schema]`, or by hand for collection payloads.
pub trait PayloadSchema: Serialize + DeserializeOwned + Send + Sync + 'static {
    fn schema() -> &'static SchemaHandle;
}
