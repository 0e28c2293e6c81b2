//! Model Config CLI
//!
//! View and manage model compiler configuration.

use clap::{Parser, Subcommand};
use familiar_models::CompilerConfig;

#[derive(Parser)]
#[command(name = "model-config")]
#[command(about = "View and manage model compiler configuration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration
    Show {
        /// Config file to load (optional)
        #[arg(short, long)]
        config: Option<String>,

        /// Output as TOML
        #[arg(long)]
        toml: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new config file
    Init {
        /// Output path (default: models.toml)
        #[arg(short, long, default_value = "models.toml")]
        output: String,
    },

    /// Validate configuration
    Validate {
        /// Config file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show { config, toml, json } => {
            let cfg = CompilerConfig::load_from(config.as_deref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else if toml {
                println!("{}", ::toml::to_string_pretty(&cfg)?);
            } else {
                println!("📋 Model Compiler Configuration\n");
                println!("Naming:");
                println!("  Anonymous prefix: {}", cfg.naming.anonymous_prefix);
                println!("  Enum suffix: {}", cfg.naming.enum_suffix);
                let acronyms: Vec<&str> = cfg.naming.acronyms.iter().map(String::as_str).collect();
                println!("  Acronyms: {}", acronyms.join(", "));

                println!("\nOutput:");
                println!("  Format: {:?}", cfg.output.format);
                println!("  Properties: {}", cfg.output.include_properties);
            }
        }

        Commands::Init { output } => {
            let cfg = CompilerConfig::default();
            cfg.save(&output)?;
            println!("✅ Created config file: {}", output);
        }

        Commands::Validate { config } => match CompilerConfig::load_from(config.as_deref()) {
            Ok(cfg) => {
                println!("✅ Configuration is valid");
                println!("   Anonymous prefix: {}", cfg.naming.anonymous_prefix);
                println!("   Enum suffix: {}", cfg.naming.enum_suffix);
            }
            Err(e) => {
                eprintln!("❌ Configuration error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
