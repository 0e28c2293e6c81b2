//! Model Compiler CLI
//!
//! Compiles a JSON-encoded object schema and prints the synthesized models.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use familiar_models::config::OutputFormat;
use familiar_models::{CompilerConfig, ModelCompiler, ModelOptions, SchemaNode, TypeCatalog};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "model-compiler")]
#[command(about = "Compile validation schemas into model metadata")]
struct Cli {
    /// Config file to load (optional)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a schema and print every model and enum as JSON
    Compile {
        /// Schema file (JSON)
        schema: PathBuf,
        /// Explicit name for the root model
        #[arg(short, long)]
        name: Option<String>,
        /// Compact JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Print a field summary for the root model
    Fields {
        /// Schema file (JSON)
        schema: PathBuf,
        /// Explicit name for the root model
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CompilerConfig::load_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Compile { schema, name, compact } => {
            let node = SchemaNode::from_file(&schema)?;
            let format = if compact { OutputFormat::Compact } else { config.output.format };
            let include_properties = config.output.include_properties;

            let mut compiler = ModelCompiler::with_config(TypeCatalog::new(), config);
            compiler.model_from_schema(&node, &options(name))?;
            let catalog = compiler.into_host();

            let mut models = Vec::new();
            for model in catalog.models() {
                let mut value = serde_json::to_value(&**model)?;
                if !include_properties {
                    strip_properties(&mut value);
                }
                models.push(value);
            }
            let enums: Vec<_> = catalog.enums().map(|e| &**e).collect();
            let output = json!({ "enums": enums, "models": models });

            match format {
                OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&output)?),
                OutputFormat::Compact => println!("{}", serde_json::to_string(&output)?),
            }
        }

        Commands::Fields { schema, name } => {
            let node = SchemaNode::from_file(&schema)?;
            let mut compiler = ModelCompiler::with_config(TypeCatalog::new(), config);
            let model = compiler.model_from_schema(&node, &options(name))?;

            println!("📋 {}", model.name);
            if let Some(description) = &model.description {
                println!("   {}", description);
            }
            println!();
            for field in &model.fields {
                let nullable = serde_json::to_string(&field.nullable)?;
                println!("  {:<20} {:<24} nullable={}", field.key, field.field_type.to_string(), nullable);
                if let Some(default) = &field.default_value {
                    println!("  {:<20} default={}", "", default);
                }
            }
            let enum_count = compiler.host().enums().count();
            if enum_count > 0 {
                println!("\n  {} enum type(s) registered", enum_count);
            }
        }
    }

    Ok(())
}

fn options(name: Option<String>) -> ModelOptions {
    ModelOptions {
        name,
        ..ModelOptions::default()
    }
}

fn strip_properties(model: &mut Value) {
    if let Some(fields) = model.get_mut("fields").and_then(Value::as_array_mut) {
        for field in fields {
            if let Some(field) = field.as_object_mut() {
                field.remove("property");
            }
        }
    }
}
