use colored::*;
use eyre::Result;

use eventify::config::{API_KEY_ENV, Config, redact};

use crate::cli::{ConfigAction, OutputFormat};

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    let config = config.redacted();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&config)?);
        }
        OutputFormat::Text => {
            println!("{}", "Eventify Configuration".bold());
            println!();

            let api_key = match (&config.api_key, std::env::var(API_KEY_ENV)) {
                (Some(key), _) => key.clone(),
                (None, Ok(key)) if !key.is_empty() => format!("{} (from {})", redact(&key), API_KEY_ENV),
                _ => "not set".red().to_string(),
            };

            println!("  api_key: {}", api_key);
            println!("  base_uri: {}", config.base_uri);
            println!("  raise_errors: {}", config.raise_errors);
            println!("  log_successes: {}", config.log_successes);
            println!("  log_level: {}", config.log_level.as_filter());
        }
    }

    Ok(())
}
