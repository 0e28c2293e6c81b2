//! Familiar Model Compiler
//!
//! Compiles declarative validation schemas into the metadata a
//! reflection-driven API layer needs to expose them as typed models.
//!
//! ## Features
//!
//! - **Ordered Field Descriptors**: One descriptor per schema key, in declaration order
//! - **Nullability Policy**: `false | true | "items" | "itemsAndList"` from optional/nullable/array composition
//! - **Shared Enum Types**: One registered enum per field key, reused across models
//! - **Stable Naming**: Explicit names, `Name: description` prefixes, or synthesized `ClassFromZod_<n>`
//! - **Nested Models**: Object fields compile into their own models
//!
//! ## Pipeline
//!
//! ```text
//! SchemaNode (object)
//!   └─> NameExtractor ──────────────> name + description
//!   └─> parse_shape
//!         └─> per key: resolve_type_info ──> (enum?) EnumRegistry
//!         └─> Vec<FieldDescriptor>
//!   └─> TypeHost::synthesize_model ──> ModelRef
//! ```
//!
//! ## Example
//!
//! ```
//! use familiar_models::{ModelCompiler, ModelOptions, Nullability, SchemaNode, TypeCatalog};
//!
//! let schema = SchemaNode::object([
//!     ("id", SchemaNode::number()),
//!     ("tags", SchemaNode::array(SchemaNode::string().optional())),
//! ])
//! .describe("Widget: a small thing");
//!
//! let mut compiler = ModelCompiler::new(TypeCatalog::new());
//! let model = compiler.model_from_schema(&schema, &ModelOptions::default()).unwrap();
//!
//! assert_eq!(model.name, "Widget");
//! assert_eq!(model.field("tags").unwrap().nullable, Nullability::Items);
//! ```

pub mod binding;
pub mod compiler;
pub mod config;
pub mod error;
pub mod host;
pub mod model;
pub mod naming;
pub mod schema;

pub use binding::{NameOrOptions, OperationBinding, OperationOptions};
pub use compiler::{EnumRegistry, ModelCompiler, PropertySlot, ResolvedTypeInfo};
pub use config::CompilerConfig;
pub use error::{CompileError, Result};
pub use host::{EnumType, EnumTypeRef, TypeCatalog, TypeHost};
pub use model::{FieldDescriptor, FieldOptions, ModelOptions, ModelRef, ModelType, Nullability, OutputType};
pub use naming::{NameAndDescription, NameExtractor, NameSequence, NamingConvention};
pub use schema::{NodeKind, SchemaNode};
