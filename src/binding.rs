//! Operation binding
//!
//! Operations (queries, mutations) take their arguments from a schema-driven
//! input model. The caller supplies either a bare operation name or a full
//! options object; the nested `zod` section carries the model options.
//! Binding compiles the input model and hands back the base options with the
//! model reference, ready for the host's operation decorator factory.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::host::TypeHost;
use crate::model::{ModelOptions, ModelRef};
use crate::schema::SchemaNode;
use crate::ModelCompiler;

/// Base options of a host operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<String>,
    /// Options for the input model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zod: Option<ModelOptions>,
}

/// Operation name or full options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameOrOptions {
    Name(String),
    Options(OperationOptions),
}

impl From<&str> for NameOrOptions {
    fn from(name: &str) -> Self {
        NameOrOptions::Name(name.to_string())
    }
}

impl From<OperationOptions> for NameOrOptions {
    fn from(options: OperationOptions) -> Self {
        NameOrOptions::Options(options)
    }
}

/// Compiled input model plus the resolved base options
#[derive(Debug, Clone)]
pub struct OperationBinding {
    pub model: ModelRef,
    /// Base options; `zod` is always `None` here
    pub options: OperationOptions,
}

impl<H: TypeHost> ModelCompiler<H> {
    /// Compile `input` and pair it with the operation's base options
    pub fn bind_operation(
        &mut self,
        input: &SchemaNode,
        name_or_options: Option<NameOrOptions>,
    ) -> Result<OperationBinding> {
        let (options, model_options) = match name_or_options {
            None => (OperationOptions::default(), ModelOptions::default()),
            Some(NameOrOptions::Name(name)) => (
                OperationOptions {
                    name: Some(name),
                    ..OperationOptions::default()
                },
                ModelOptions::default(),
            ),
            Some(NameOrOptions::Options(mut options)) => {
                let model_options = options.zod.take().unwrap_or_default();
                (options, model_options)
            }
        };

        let model = self.model_from_schema(input, &model_options)?;
        tracing::debug!(operation = ?options.name, model = %model.name, "bound operation input");

        Ok(OperationBinding { model, options })
    }
}
