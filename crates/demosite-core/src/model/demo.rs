//! Demo records and the validated input used to create them.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// A persisted Demo record. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl fmt::Display for DemoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Form input that passed validation. Both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDemo {
    name: String,
    description: String,
}

impl NewDemo {
    /// Trim both fields and reject the pair if either ends up empty.
    /// No length or character-set checks are applied.
    pub fn new(name: &str, description: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let description = description.trim();
        if name.is_empty() || description.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attach the store-assigned id.
    pub fn into_record(self, id: i64) -> DemoRecord {
        DemoRecord {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
