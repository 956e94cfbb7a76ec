//! # wabi-cli
//!
//! Command-line front end for the wabi contract ABI codec.
//!
//! ## Usage
//!
//! ```bash
//! # Signatures and types
//! wabi selector "transfer(address,uint256)"
//! wabi type "uint[][3]"
//!
//! # Calls against an ABI file
//! wabi --abi token.json functions
//! wabi --abi token.json encode transfer '["0x1234567890123456789012345678901234567890", 1000]'
//! wabi --abi token.json decode 0x4b40e901...
//!
//! # Configuration
//! wabi config --set-abi token.json
//! wabi config --show
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// wabi ABI codec CLI
#[derive(Parser, Debug)]
#[command(name = "wabi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Path to a JSON ABI file
    #[arg(long, global = true)]
    abi: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the canonical form and selector of a function signature
    Selector {
        /// Signature such as "transfer(address,uint256)"
        signature: String,
    },
    /// Show the canonical name and layout of a type
    Type {
        /// Type name such as "uint[][3]"
        name: String,
    },
    /// List the functions of the ABI file
    Functions,
    /// Encode a function call
    Encode {
        /// Function name
        function: String,
        /// Arguments as a JSON array
        #[arg(default_value = "[]")]
        args: String,
    },
    /// Decode a function call payload
    Decode {
        /// Hex payload, selector included
        data: String,
    },
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set the default ABI file
        #[arg(long)]
        set_abi: Option<PathBuf>,
        /// Set the default log level
        #[arg(long)]
        set_log_level: Option<String>,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = Config::load();

    init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level));

    let json = cli.json || config.json;
    let abi_path = cli.abi.or_else(|| config.abi_path.clone());

    let result = match cli.command {
        Commands::Selector { signature } => commands::inspect::selector(&signature, json),
        Commands::Type { name } => commands::inspect::type_info(&name, json),
        Commands::Functions => commands::call::functions(abi_path.as_deref(), json),
        Commands::Encode { function, args } => {
            commands::call::encode(abi_path.as_deref(), &function, &args, json)
        }
        Commands::Decode { data } => commands::call::decode(abi_path.as_deref(), &data, json),
        Commands::Config {
            show,
            set_abi,
            set_log_level,
        } => handle_config(&mut config, show, set_abi, set_log_level, json),
    };

    if let Err(e) = result {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_abi: Option<PathBuf>,
    set_log_level: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(path) = set_abi {
        let path = std::fs::canonicalize(&path)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        config.abi_path = Some(path);
        modified = true;
    }

    if let Some(level) = set_log_level {
        EnvFilter::try_new(&level).map_err(|e| CliError::Config(e.to_string()))?;
        config.log_level = level;
        modified = true;
    }

    if modified {
        let path = config.save()?;
        tracing::info!(path = %path.display(), "saved config");
        Output::new(json)
            .field("status", "saved")
            .line("Configuration saved")
            .print();
    } else if show {
        let abi = config
            .abi_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Output::new(json)
            .line(format!(
                "ABI file: {}",
                if abi.is_empty() { "(none)" } else { abi.as_str() }
            ))
            .line(format!("JSON output: {}", config.json))
            .line(format!("Log level: {}", config.log_level))
            .field("abi_path", abi)
            .field("json", config.json)
            .field("log_level", config.log_level.as_str())
            .print();
    } else {
        Output::new(json)
            .line("Use --show to display config, or --set-abi/--set-log-level to modify")
            .print();
    }

    Ok(())
}
