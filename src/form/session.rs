use super::fields::FormFields;
use crate::{types::TripRequest, PlannerError, Result};
use serde::{Deserialize, Serialize};

/// A dynamically added member input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberField {
    /// Stable field name, e.g. `member_name_3`
    pub name: String,
    pub value: String,
}

/// State of one form-filling session.
///
/// Owns the counter used to name member inputs, so two sessions never share
/// numbering and removed fields never have their names reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSession {
    pub fields: FormFields,
    member_fields: Vec<MemberField>,
    member_counter: u32,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Add an empty member input and return its field name.
    pub fn add_member_field(&mut self) -> String {
        self.member_counter += 1;
        let name = format!("member_name_{}", self.member_counter);
        self.member_fields.push(MemberField {
            name: name.clone(),
            value: String::new(),
        });
        name
    }

    /// Add a member input already holding a value.
    pub fn add_member(&mut self, value: impl Into<String>) -> String {
        let name = self.add_member_field();
        // add_member_field just pushed this entry
        if let Some(field) = self.member_fields.last_mut() {
            field.value = value.into();
        }
        name
    }

    pub fn set_member(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = self
            .member_fields
            .iter_mut()
            .find(|field| field.name == name)
            .ok_or_else(|| PlannerError::NotFound(format!("member field `{}`", name)))?;
        field.value = value.into();
        Ok(())
    }

    pub fn remove_member(&mut self, name: &str) -> Result<MemberField> {
        let idx = self
            .member_fields
            .iter()
            .position(|field| field.name == name)
            .ok_or_else(|| PlannerError::NotFound(format!("member field `{}`", name)))?;
        Ok(self.member_fields.remove(idx))
    }

    pub fn member_fields(&self) -> &[MemberField] {
        &self.member_fields
    }

    /// Non-blank member values in the order their inputs were added
    pub fn members(&self) -> Vec<String> {
        self.member_fields
            .iter()
            .map(|field| field.value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Number of member inputs ever created in this session
    pub fn member_counter(&self) -> u32 {
        self.member_counter
    }

    /// Build a request from the form, using member inputs when any exist.
    pub fn build_request(&self) -> Result<TripRequest> {
        let members = if self.member_fields.is_empty() {
            None
        } else {
            Some(self.members())
        };
        self.fields.clone().into_request_with_members(members)
    }
}
