//! SpeechIntent CLI — the main entry point.
//!
//! Commands:
//! - `serve`    — Start the relay HTTP server (default)
//! - `sanitize` — Sanitize a raw reply offline
//! - `config`   — Print the effective configuration

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "speechintent",
    about = "SpeechIntent — intent-classification relay for the Gemini API",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the relay HTTP server
    Serve {
        /// Override the port (otherwise PORT, then 10000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the sanitized form of a raw model reply
    Sanitize {
        /// The raw reply text
        text: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Sanitize { text } => commands::sanitize::run(&text),
        Commands::Config => commands::config_cmd::run()?,
    }

    Ok(())
}
