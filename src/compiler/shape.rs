//! Shape Parser
//!
//! Walks an object schema's fields in declaration order and emits one
//! [`FieldDescriptor`] per key. Any field of an unsupported kind aborts the
//! whole parse.

use serde_json::Value;

use crate::error::{CompileError, Result};
use crate::host::TypeHost;
use crate::model::{FieldDescriptor, ModelOptions, Nullability};
use crate::schema::{NodeKind, SchemaNode};

use super::property::make_descriptor;
use super::{ModelCompiler, ResolvedTypeInfo};

impl<H: TypeHost> ModelCompiler<H> {
    /// Compile every field of `schema` (which must be an object node)
    pub fn parse_shape(
        &mut self,
        schema: &SchemaNode,
        options: &ModelOptions,
    ) -> Result<Vec<FieldDescriptor>> {
        let shape = schema
            .shape()
            .ok_or(CompileError::NotAnObject { kind: schema.tag() })?;
        let mut parsed = Vec::with_capacity(shape.len());

        for (key, prop) in shape {
            if !prop.kind().is_field_kind() {
                tracing::warn!(%key, kind = prop.tag(), "schema field cannot be processed");
                return Err(CompileError::UnsupportedNodeKind {
                    key: key.clone(),
                    kind: prop.tag(),
                });
            }

            let property = make_descriptor(key, prop, options);
            let mut info = self.resolve_type_info(key, prop, options)?;

            if info.is_enum {
                let handle =
                    self.enums
                        .build_or_get(key, &info, options, &self.config.naming, &mut self.host)?;
                info.ty = info.ty.with_enum(&handle);
            }

            let (nullable, default_value) =
                nullability_policy(&info, prop.effective_default().cloned());

            tracing::debug!(%key, field_type = %info.ty, ?nullable, "parsed field");

            parsed.push(FieldDescriptor {
                key: key.clone(),
                field_type: info.ty,
                nullable,
                default_value,
                description: prop.effective_description().unwrap_or_default().to_string(),
                property,
            });
        }

        Ok(parsed)
    }
}

/// Reject the first field, in declaration order and depth first, whose kind
/// (or the kind below its optional and array wrappers) cannot be compiled
pub(crate) fn check_supported(schema: &SchemaNode) -> Result<()> {
    let Some(shape) = schema.shape() else {
        return Ok(());
    };
    for (key, prop) in shape {
        if !prop.kind().is_field_kind() {
            tracing::warn!(%key, kind = prop.tag(), "schema field cannot be processed");
        }
        check_field(key, prop)?;
    }
    Ok(())
}

fn check_field(key: &str, node: &SchemaNode) -> Result<()> {
    match node.kind() {
        NodeKind::Optional { inner } => check_field(key, inner),
        NodeKind::Array { items } => check_field(key, items),
        NodeKind::Object { .. } => check_supported(node),
        kind if kind.is_field_kind() => Ok(()),
        _ => Err(CompileError::UnsupportedNodeKind {
            key: key.to_string(),
            kind: node.tag(),
        }),
    }
}

/// Final nullability of a field, and the default value that survives it.
///
/// Item-nullable arrays upgrade to `ItemsAndList` when the list itself is
/// nullable or optional; otherwise they become `Items` and lose their default.
pub(crate) fn nullability_policy(
    info: &ResolvedTypeInfo,
    default_value: Option<Value>,
) -> (Nullability, Option<Value>) {
    let nullable = info.is_nullable || info.is_optional;

    if info.is_of_array && (info.is_item_nullable || info.is_item_optional) {
        if nullable {
            return (Nullability::ItemsAndList, default_value);
        }
        return (Nullability::Items, None);
    }

    (Nullability::from(nullable), default_value)
}
