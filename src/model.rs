//! Model types
//!
//! The compiler's output: field descriptors, the output types they reference,
//! and the synthesized model records built from them.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::compiler::PropertySlot;
use crate::host::EnumTypeRef;

/// Shared handle to a synthesized model
pub type ModelRef = Arc<ModelType>;

// =============================================================================
// Options
// =============================================================================

/// Options for compiling one object schema into a model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Explicit model name (skips description parsing and name synthesis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Explicit enum type names, keyed by field key
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub enum_names: IndexMap<String, String>,
}

impl ModelOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_enum_name(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.enum_names.insert(key.into(), name.into());
        self
    }

    /// Options for an object nested under this one: enum names carry over,
    /// the explicit model name does not
    pub fn for_nested(&self) -> Self {
        Self {
            name: None,
            enum_names: self.enum_names.clone(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// Output type of a field as seen by the host framework.
///
/// Registered enums and models compare by handle identity.
#[derive(Debug, Clone)]
pub enum OutputType {
    Boolean,
    String,
    Float,
    /// A registered enum type
    Enum(EnumTypeRef),
    /// An enum awaiting registration (carries its members)
    PendingEnum(Vec<String>),
    List(Box<OutputType>),
    Model(ModelRef),
}

impl OutputType {
    pub fn list(item: OutputType) -> Self {
        OutputType::List(Box::new(item))
    }

    /// Replace any pending enum (at any list depth) with the registered handle
    pub fn with_enum(self, handle: &EnumTypeRef) -> Self {
        match self {
            OutputType::PendingEnum(_) => OutputType::Enum(handle.clone()),
            OutputType::List(item) => OutputType::List(Box::new(item.with_enum(handle))),
            other => other,
        }
    }

    /// False while an enum placeholder remains
    pub fn is_resolved(&self) -> bool {
        match self {
            OutputType::PendingEnum(_) => false,
            OutputType::List(item) => item.is_resolved(),
            _ => true,
        }
    }
}

impl PartialEq for OutputType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OutputType::Boolean, OutputType::Boolean)
            | (OutputType::String, OutputType::String)
            | (OutputType::Float, OutputType::Float) => true,
            (OutputType::Enum(a), OutputType::Enum(b)) => Arc::ptr_eq(a, b),
            (OutputType::PendingEnum(a), OutputType::PendingEnum(b)) => a == b,
            (OutputType::List(a), OutputType::List(b)) => a == b,
            (OutputType::Model(a), OutputType::Model(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::Boolean => write!(f, "Boolean"),
            OutputType::String => write!(f, "String"),
            OutputType::Float => write!(f, "Float"),
            OutputType::Enum(handle) => write!(f, "{}", handle.name),
            OutputType::PendingEnum(values) => write!(f, "enum({})", values.join(" | ")),
            OutputType::List(item) => write!(f, "[{}]", item),
            OutputType::Model(model) => write!(f, "{}", model.name),
        }
    }
}

impl Serialize for OutputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Nullability
// =============================================================================

/// Which parts of a field may be null or absent.
///
/// Serializes as `false`, `true`, `"items"` or `"itemsAndList"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nullability {
    #[default]
    No,
    Yes,
    /// Only the list items
    Items,
    /// Both the list and its items
    ItemsAndList,
}

impl From<bool> for Nullability {
    fn from(nullable: bool) -> Self {
        if nullable {
            Nullability::Yes
        } else {
            Nullability::No
        }
    }
}

impl Serialize for Nullability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullability::No => serializer.serialize_bool(false),
            Nullability::Yes => serializer.serialize_bool(true),
            Nullability::Items => serializer.serialize_str("items"),
            Nullability::ItemsAndList => serializer.serialize_str("itemsAndList"),
        }
    }
}

// =============================================================================
// Field Descriptors
// =============================================================================

/// One compiled object field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub field_type: OutputType,
    pub nullable: Nullability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    pub description: String,
    /// Storage slot on the synthesized model
    pub property: PropertySlot,
}

/// Options handed to the host framework's field registration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    pub name: String,
    pub nullable: Nullability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    pub description: String,
}

impl FieldDescriptor {
    pub fn field_options(&self) -> FieldOptions {
        FieldOptions {
            name: self.key.clone(),
            nullable: self.nullable,
            default_value: self.default_value.clone(),
            description: self.description.clone(),
        }
    }
}

// =============================================================================
// Models
// =============================================================================

/// A synthesized model: a named record of compiled fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl ModelType {
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }
}
