use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "eventify",
    about = "Publish events to the EventifyPro API",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/eventify/logs/eventify.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to eventify.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish a single event
    Publish {
        /// Event type, e.g. OrderPosted
        #[arg(value_parser = parse_event_type)]
        event_type: String,

        /// Event data as a JSON object
        #[arg(long, short, conflicts_with = "data_file")]
        data: Option<String>,

        /// Read event data from a JSON file
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// API key (defaults to config, then EVENTIFY_PRO_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Override the API base URI
        #[arg(long)]
        base_uri: Option<String>,

        /// Fail with the typed error instead of reporting false
        #[arg(long)]
        raise_errors: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },
}

fn parse_event_type(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("event type must not be empty".to_string());
    }
    Ok(s.to_string())
}
