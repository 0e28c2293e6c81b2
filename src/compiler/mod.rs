//! Model Compilation
//!
//! Turns object schemas into models registered with a [`TypeHost`].
//!
//! Pipeline, per object:
//! - NameExtractor: model name + description
//! - Shape parser: one field descriptor per key, in declaration order
//! - Type info resolver: per-field type and nullability flags (recursive)
//! - Enum registry: shared enum handles, keyed by field key
//! - Host: synthesizes the model from the descriptors
//!
//! A [`ModelCompiler`] is one compilation scope. Its enum registry lives as
//! long as the compiler; the name sequence is shared process-wide unless one
//! is injected.

pub mod enums;
pub mod property;
pub mod resolve;
pub mod shape;

pub use enums::EnumRegistry;
pub use property::{make_descriptor, PropertySlot};
pub use resolve::ResolvedTypeInfo;

use std::sync::Arc;

use crate::config::CompilerConfig;
use crate::error::{CompileError, Result};
use crate::host::TypeHost;
use crate::model::{ModelOptions, ModelRef};
use crate::naming::{NameAndDescription, NameExtractor, NameSequence, NamingConvention};
use crate::schema::SchemaNode;

/// Compiles object schemas into host models
pub struct ModelCompiler<H> {
    host: H,
    enums: EnumRegistry,
    names: NameExtractor,
    config: CompilerConfig,
}

impl<H: TypeHost> ModelCompiler<H> {
    /// Compiler with default configuration and the process-wide name sequence
    pub fn new(host: H) -> Self {
        Self::with_config(host, CompilerConfig::default())
    }

    pub fn with_config(host: H, config: CompilerConfig) -> Self {
        Self::with_sequence(host, config, NameSequence::global())
    }

    /// Compiler drawing synthesized names from `sequence`
    pub fn with_sequence(host: H, config: CompilerConfig, sequence: Arc<NameSequence>) -> Self {
        let names = NameExtractor::new(sequence, config.naming.anonymous_prefix.clone());
        Self {
            host,
            enums: EnumRegistry::new(),
            names,
            config,
        }
    }

    /// Replace the description naming convention
    pub fn with_convention(mut self, convention: impl NamingConvention + 'static) -> Self {
        self.names = self.names.with_convention(convention);
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn enums(&self) -> &EnumRegistry {
        &self.enums
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Name and description the model for `schema` would receive.
    ///
    /// Consumes a sequence value when a name has to be synthesized.
    pub fn extract_name_and_description(
        &self,
        schema: &SchemaNode,
        options: &ModelOptions,
    ) -> NameAndDescription {
        self.names.extract(schema, options)
    }

    /// Compile an object schema and synthesize its model through the host.
    ///
    /// The whole tree is checked for unsupported kinds first, so a rejected
    /// schema registers nothing with the host.
    pub fn model_from_schema(&mut self, schema: &SchemaNode, options: &ModelOptions) -> Result<ModelRef> {
        if schema.shape().is_none() {
            return Err(CompileError::NotAnObject { kind: schema.tag() });
        }
        shape::check_supported(schema)?;

        self.compile_object(schema, options)
    }

    /// Compile an already checked object schema, nested models included
    pub(crate) fn compile_object(&mut self, schema: &SchemaNode, options: &ModelOptions) -> Result<ModelRef> {
        let NameAndDescription { name, description } = self.names.extract(schema, options);
        let _span = tracing::debug_span!("model", %name).entered();

        let fields = self.parse_shape(schema, options)?;
        self.host.synthesize_model(&name, description.as_deref(), fields)
    }
}
