//! JSON schema handles for payloads that cross the storage boundary

pub mod schema;
mod validation;
pub mod validator;

pub use schema::{PayloadDocs, PayloadSchema, SchemaHandle};
pub use validator::Validator;
