//! Validation schema nodes
//!
//! The compiler's input: a tree of typed nodes describing an object's shape.
//! Nodes deserialize from JSON with an internal `kind` tag:
//!
//! ```json
//! {
//!   "kind": "object",
//!   "description": "Widget: a small thing",
//!   "shape": {
//!     "id": { "kind": "number" },
//!     "tags": { "kind": "array", "items": { "kind": "optional", "inner": { "kind": "string" } } },
//!     "status": { "kind": "enum", "values": ["A", "B"] }
//!   }
//! }
//! ```
//!
//! Object shapes keep their declaration order.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A single node of a validation schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Structural kind and children
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Attached description (may carry a `Name: text` prefix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default value offered to the host framework
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// The node's own nullable marker (independent of optionality)
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Structural kind of a schema node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Object {
        shape: IndexMap<String, SchemaNode>,
    },
    Array {
        items: Box<SchemaNode>,
    },
    Boolean,
    String,
    Number,
    Enum {
        values: Vec<String>,
    },
    Optional {
        inner: Box<SchemaNode>,
    },

    // Representable, but not compiled into model fields
    Date,
    #[serde(rename = "bigint")]
    BigInt,
    Literal {
        value: Value,
    },
    Union {
        options: Vec<SchemaNode>,
    },
    Record {
        values: Box<SchemaNode>,
    },
    Any,
}

impl NodeKind {
    /// Tag name as it appears in serialized schemas
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Object { .. } => "object",
            NodeKind::Array { .. } => "array",
            NodeKind::Boolean => "boolean",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Enum { .. } => "enum",
            NodeKind::Optional { .. } => "optional",
            NodeKind::Date => "date",
            NodeKind::BigInt => "bigint",
            NodeKind::Literal { .. } => "literal",
            NodeKind::Union { .. } => "union",
            NodeKind::Record { .. } => "record",
            NodeKind::Any => "any",
        }
    }

    /// Whether an object field of this kind can be compiled
    pub fn is_field_kind(&self) -> bool {
        matches!(
            self,
            NodeKind::Array { .. }
                | NodeKind::Boolean
                | NodeKind::String
                | NodeKind::Number
                | NodeKind::Enum { .. }
                | NodeKind::Optional { .. }
                | NodeKind::Object { .. }
        )
    }
}

// =============================================================================
// Construction
// =============================================================================

impl SchemaNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            description: None,
            default_value: None,
            nullable: false,
        }
    }

    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SchemaNode)>,
    {
        let shape = fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self::new(NodeKind::Object { shape })
    }

    pub fn array(items: SchemaNode) -> Self {
        Self::new(NodeKind::Array { items: Box::new(items) })
    }

    pub fn boolean() -> Self {
        Self::new(NodeKind::Boolean)
    }

    pub fn string() -> Self {
        Self::new(NodeKind::String)
    }

    pub fn number() -> Self {
        Self::new(NodeKind::Number)
    }

    pub fn enumeration<S, I>(values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(NodeKind::Enum { values })
    }

    /// Wrap this node in an optional wrapper
    pub fn optional(self) -> Self {
        Self::new(NodeKind::Optional { inner: Box::new(self) })
    }

    /// Set the node's own nullable marker
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Load a JSON-encoded schema
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl SchemaNode {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Child shape of an object node
    pub fn shape(&self) -> Option<&IndexMap<String, SchemaNode>> {
        match &self.kind {
            NodeKind::Object { shape } => Some(shape),
            _ => None,
        }
    }

    /// Item node of an array
    pub fn items(&self) -> Option<&SchemaNode> {
        match &self.kind {
            NodeKind::Array { items } => Some(items),
            _ => None,
        }
    }

    /// Inner node of an optional wrapper
    pub fn inner(&self) -> Option<&SchemaNode> {
        match &self.kind {
            NodeKind::Optional { inner } => Some(inner),
            _ => None,
        }
    }

    pub fn enum_values(&self) -> Option<&[String]> {
        match &self.kind {
            NodeKind::Enum { values } => Some(values),
            _ => None,
        }
    }

    /// Walk through optional wrappers, outermost first
    pub fn unwrap_chain(&self) -> impl Iterator<Item = &SchemaNode> {
        std::iter::successors(Some(self), |node| node.inner())
    }

    /// First description found on this node or its optional wrappers' inner nodes
    pub fn effective_description(&self) -> Option<&str> {
        self.unwrap_chain().find_map(SchemaNode::description)
    }

    /// First default value found on this node or its optional wrappers' inner nodes
    pub fn effective_default(&self) -> Option<&Value> {
        self.unwrap_chain().find_map(SchemaNode::default_value)
    }
}
