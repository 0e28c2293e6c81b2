//! Type Info Resolver
//!
//! Classifies one schema node into an output type plus the flags the shape
//! parser needs for its nullability policy. Optional wrappers and arrays are
//! unwrapped recursively; nested objects compile into their own models.

use crate::error::{CompileError, Result};
use crate::host::TypeHost;
use crate::model::{ModelOptions, OutputType};
use crate::schema::{NodeKind, SchemaNode};

use super::ModelCompiler;

/// Resolved classification of a single field node
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTypeInfo {
    pub ty: OutputType,
    pub is_nullable: bool,
    pub is_optional: bool,
    pub is_enum: bool,
    pub is_of_array: bool,
    /// Only meaningful when `is_of_array`
    pub is_item_nullable: bool,
    /// Only meaningful when `is_of_array`
    pub is_item_optional: bool,
    /// Members of the enum awaiting registration
    pub enum_values: Option<Vec<String>>,
}

impl ResolvedTypeInfo {
    fn scalar(ty: OutputType, is_nullable: bool) -> Self {
        Self {
            ty,
            is_nullable,
            is_optional: false,
            is_enum: false,
            is_of_array: false,
            is_item_nullable: false,
            is_item_optional: false,
            enum_values: None,
        }
    }
}

impl<H: TypeHost> ModelCompiler<H> {
    /// Resolve the type info for the field `key`.
    ///
    /// Enums resolve to [`OutputType::PendingEnum`]; registration is left to
    /// the caller.
    pub fn resolve_type_info(
        &mut self,
        key: &str,
        node: &SchemaNode,
        options: &ModelOptions,
    ) -> Result<ResolvedTypeInfo> {
        tracing::trace!(%key, kind = node.tag(), "resolving type info");

        match node.kind() {
            NodeKind::Optional { inner } => {
                let mut info = self.resolve_type_info(key, inner, options)?;
                info.is_optional = true;
                info.is_nullable |= node.nullable;
                Ok(info)
            }
            NodeKind::Array { items } => {
                let item = self.resolve_type_info(key, items, options)?;
                Ok(ResolvedTypeInfo {
                    ty: OutputType::list(item.ty),
                    is_nullable: node.nullable,
                    is_optional: false,
                    is_enum: item.is_enum,
                    is_of_array: true,
                    is_item_nullable: item.is_nullable,
                    is_item_optional: item.is_optional,
                    enum_values: item.enum_values,
                })
            }
            NodeKind::Enum { values } => Ok(ResolvedTypeInfo {
                ty: OutputType::PendingEnum(values.clone()),
                is_enum: true,
                enum_values: Some(values.clone()),
                ..ResolvedTypeInfo::scalar(OutputType::String, node.nullable)
            }),
            NodeKind::Boolean => Ok(ResolvedTypeInfo::scalar(OutputType::Boolean, node.nullable)),
            NodeKind::String => Ok(ResolvedTypeInfo::scalar(OutputType::String, node.nullable)),
            NodeKind::Number => Ok(ResolvedTypeInfo::scalar(OutputType::Float, node.nullable)),
            NodeKind::Object { .. } => {
                let model = self.compile_object(node, &options.for_nested())?;
                Ok(ResolvedTypeInfo::scalar(OutputType::Model(model), node.nullable))
            }
            NodeKind::Date
            | NodeKind::BigInt
            | NodeKind::Literal { .. }
            | NodeKind::Union { .. }
            | NodeKind::Record { .. }
            | NodeKind::Any => Err(CompileError::UnsupportedNodeKind {
                key: key.to_string(),
                kind: node.tag(),
            }),
        }
    }
}
