use crate::ai::flashcards::GenerationSettings;
use crate::ai::OpenAiClient;
use crate::config::Config;
use crate::models::FlashcardRequest;
use crate::FlashcardGenerator;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

#[derive(Debug, Parser)]
#[command(name = "flashcards")]
#[command(author, version, about = "Generate Q/A flashcards from text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
    /// Generate flashcards once and print them as JSON
    Generate {
        /// Input text file ("-" or omitted reads stdin)
        file: Option<PathBuf>,
    },
}

/// Build the generator and its provider client from configuration.
pub fn build_generator(config: &Config) -> anyhow::Result<FlashcardGenerator> {
    let client = OpenAiClient::new(
        config.api_key.clone(),
        config.base_url.clone(),
        config.request_timeout,
    )
    .context("Failed to build HTTP client")?;

    Ok(FlashcardGenerator::new(Arc::new(client))
        .with_settings(GenerationSettings {
            model: config.model.clone(),
            temperature: config.temperature,
        })
        .with_words_per_chunk(config.words_per_chunk))
}

/// Run the CLI.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    let generator = build_generator(&config)?;

    match cli.command {
        Command::Serve { host, port } => {
            let addr = SocketAddr::new(host, port);
            crate::server::serve(addr, generator, shutdown_signal())
                .await
                .with_context(|| format!("Server on {addr} failed"))?;
        }
        Command::Generate { file } => {
            let text = read_input(file.as_deref()).await?;
            let response = generator.generate(&FlashcardRequest { text }).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

async fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
