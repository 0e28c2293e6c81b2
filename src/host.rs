//! Host framework collaborator
//!
//! The compiler never builds framework types itself; it asks a [`TypeHost`]
//! to register enums and synthesize models. [`TypeCatalog`] is the in-memory
//! host used by the CLI and tests: it keeps every registered type in
//! registration order and rejects conflicting names; re-registering an
//! identical type hands back the handle it already holds.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{CompileError, Result};
use crate::model::{FieldDescriptor, ModelRef, ModelType};

/// Shared handle to a registered enum type
pub type EnumTypeRef = Arc<EnumType>;

/// A registered output enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumType {
    pub name: String,
    /// Member name -> value
    pub members: IndexMap<String, String>,
}

impl EnumType {
    /// Enum whose member names equal their values
    pub fn new<S, I>(name: impl Into<String>, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let members = values
            .into_iter()
            .map(|v| {
                let v = v.into();
                (v.clone(), v)
            })
            .collect();
        Self {
            name: name.into(),
            members,
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.members.values().map(String::as_str)
    }
}

/// Type registration surface of the host framework
pub trait TypeHost {
    /// Register an enum under `name`.
    ///
    /// Registering the same name with the same members returns the existing
    /// handle; a different member set is a [`CompileError::DuplicateEnumRegistration`].
    fn register_enum(&mut self, name: &str, members: IndexMap<String, String>) -> Result<EnumTypeRef>;

    /// Build a model type from compiled fields.
    ///
    /// Synthesizing the same name with identical description and fields
    /// returns the existing handle; anything else under a taken name is a
    /// [`CompileError::DuplicateModel`].
    fn synthesize_model(
        &mut self,
        name: &str,
        description: Option<&str>,
        fields: Vec<FieldDescriptor>,
    ) -> Result<ModelRef>;
}

// =============================================================================
// In-memory Host
// =============================================================================

/// In-memory type catalog
#[derive(Debug, Default)]
pub struct TypeCatalog {
    enums: IndexMap<String, EnumTypeRef>,
    models: IndexMap<String, ModelRef>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_enum(&self, name: &str) -> Option<&EnumTypeRef> {
        self.enums.get(name)
    }

    pub fn get_model(&self, name: &str) -> Option<&ModelRef> {
        self.models.get(name)
    }

    /// Registered enums in registration order
    pub fn enums(&self) -> impl Iterator<Item = &EnumTypeRef> {
        self.enums.values()
    }

    /// Registered models in registration order (nested models first)
    pub fn models(&self) -> impl Iterator<Item = &ModelRef> {
        self.models.values()
    }
}

impl TypeHost for TypeCatalog {
    fn register_enum(&mut self, name: &str, members: IndexMap<String, String>) -> Result<EnumTypeRef> {
        if let Some(existing) = self.enums.get(name) {
            if existing.members == members {
                return Ok(existing.clone());
            }
            return Err(CompileError::DuplicateEnumRegistration {
                name: name.to_string(),
            });
        }

        let handle = Arc::new(EnumType {
            name: name.to_string(),
            members,
        });
        self.enums.insert(name.to_string(), handle.clone());
        tracing::info!(%name, "registered enum type");
        Ok(handle)
    }

    fn synthesize_model(
        &mut self,
        name: &str,
        description: Option<&str>,
        fields: Vec<FieldDescriptor>,
    ) -> Result<ModelRef> {
        let model = ModelType {
            name: name.to_string(),
            description: description.map(str::to_string),
            fields,
        };

        if let Some(existing) = self.models.get(name) {
            if **existing == model {
                tracing::debug!(%name, "model already synthesized");
                return Ok(existing.clone());
            }
            return Err(CompileError::DuplicateModel {
                name: name.to_string(),
            });
        }

        let model = Arc::new(model);
        self.models.insert(name.to_string(), model.clone());
        tracing::info!(%name, fields = model.fields.len(), "synthesized model");
        Ok(model)
    }
}
