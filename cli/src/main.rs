use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use sufra_core::{classify, parse_payload, DomainErrorResult, Translator};
use sufra_shared::TranslatorConfig;

mod args;
mod logging;

use args::{Cli, Command};

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.logging);

    tracing::debug!(environment = %config.environment, "Starting sufra");

    match cli.cmd {
        Command::Translate(args) => {
            let translator =
                Translator::from_config(&config).context("Failed to load message catalog")?;
            let payload = parse_payload(&read_input(args.file.as_deref())?);
            let style = args.style.unwrap_or(config.default_style);

            match translator.translate(args.domain, payload.as_ref(), style) {
                DomainErrorResult::Single(message) => println!("{}", message),
                DomainErrorResult::Fields(fields) => println!(
                    "{}",
                    serde_json::to_string_pretty(&fields).context("Failed to encode fields")?
                ),
            }
        }
        Command::Classify(args) => {
            let payload = parse_payload(&read_input(args.file.as_deref())?);
            println!("{}", classify(payload.as_ref()).kind());
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<TranslatorConfig> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            TranslatorConfig::from_toml_str(&content)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => TranslatorConfig::from_env().context("Invalid environment configuration"),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload {}", path.display())),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read payload from stdin")?;
            Ok(body)
        }
    }
}
