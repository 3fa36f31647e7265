use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "studymate")]
#[command(about = "AI study assistant: solve, explain, summarize and quiz", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Run one feature and print the answer
    Ask {
        /// solver, explainer, summarizer or questions
        feature: String,
        /// Input text, or `-` to read stdin
        input: String,
        #[command(flatten)]
        modifiers: commands::ask::ModifierArgs,
        /// Save the session under this user id
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Print recent sessions as JSON
    History {
        #[arg(short, long)]
        feature: Option<String>,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(short, long)]
        user: String,
    },
    /// Delete one saved session
    Delete {
        id: String,
        #[arg(short, long)]
        user: String,
    },
    /// Parse a summarizer reply into structured JSON
    Parse {
        /// File to read, or `-` for stdin
        #[arg(default_value = "-")]
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            commands::serve::run(&AppConfig::from_env(), host, port).await
        },
        Commands::Ask { feature, input, modifiers, user } => {
            commands::ask::run(&AppConfig::from_env(), &feature, &input, modifiers, user).await
        },
        Commands::History { feature, limit, user } => {
            commands::history::run(&AppConfig::from_env(), feature.as_deref(), limit, user).await
        },
        Commands::Delete { id, user } => {
            commands::history::delete(&AppConfig::from_env(), &id, user).await
        },
        Commands::Parse { file } => commands::parse::run(&file),
    }
}
