use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use eventify::config::Config;
use eventify::{Client, LogFacadeLogger};

/// Options given on the command line for `eventify publish`
pub struct PublishArgs {
    pub event_type: String,
    pub data: Option<String>,
    pub data_file: Option<PathBuf>,
    pub api_key: Option<String>,
    pub base_uri: Option<String>,
    pub raise_errors: bool,
}

pub fn run(args: PublishArgs, config: &Config) -> Result<()> {
    let data = load_data(args.data.as_deref(), args.data_file.as_deref())?;

    let mut builder = Client::builder()
        .base_uri(args.base_uri.unwrap_or_else(|| config.base_uri.clone()))
        .raise_errors(args.raise_errors || config.raise_errors)
        .log_successes(config.log_successes)
        .logger(Arc::new(LogFacadeLogger));

    if let Some(key) = args.api_key.or_else(|| config.api_key.clone()) {
        builder = builder.api_key(key);
    }

    let client = builder.build().context("Failed to configure client")?;
    log::info!("Publishing {} to {}", args.event_type, client.base_uri());

    let published = client
        .publish(&args.event_type, &data)
        .with_context(|| format!("Failed to publish {}", args.event_type))?;

    if published {
        println!("{} Published {}", "✓".green(), args.event_type.cyan());
        Ok(())
    } else {
        println!("{} {} was not published (see log for details)", "✗".red(), args.event_type.cyan());
        eyre::bail!("Event {} was not published", args.event_type)
    }
}

/// Event data from --data or --data-file, `{}` when neither is given. Must be a JSON object.
fn load_data(inline: Option<&str>, file: Option<&Path>) -> Result<serde_json::Value> {
    let raw = match (inline, file) {
        (Some(json), _) => json.to_string(),
        (None, Some(path)) => {
            let path = Config::expand_path(path);
            fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))?
        }
        (None, None) => return Ok(serde_json::json!({})),
    };

    let data: serde_json::Value = serde_json::from_str(&raw).context("Event data is not valid JSON")?;
    if !data.is_object() {
        eyre::bail!("Event data must be a JSON object");
    }
    Ok(data)
}
