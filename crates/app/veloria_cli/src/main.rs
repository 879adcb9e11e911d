// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands};
use veloria_core::completion::{APOLOGY, HuggingFaceProvider};
use veloria_core::{CompletionConfig, Responder, canned, normalize, responder, topic};

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Classify { message } => classify(&message.join(" ")),
        Commands::Ask { message } => ask(&message.join(" "))?,
    }

    Ok(())
}

fn classify(message: &str) {
    let normalized = normalize::normalize(message);
    let topic = topic::classify(&normalized);

    println!("normalized: {normalized}");
    println!("topic: {topic}");

    match responder::answer_locally(&normalized) {
        Some(reply) => {
            let label = match canned::match_rule(&normalized) {
                Some(rule) if reply.source == veloria_core::ReplySource::Canned => {
                    format!("canned:{}", rule.name)
                }
                _ => reply.source.as_str().to_string(),
            };
            println!("reply ({label}): {}", reply.text);
        }
        None => println!("reply (model): requires completion provider"),
    }
}

fn ask(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        return Err(Error::Custom("No message provided.".into()));
    }

    let config = CompletionConfig::from_env();
    if !config.has_api_key() {
        log::warn!("HF_API_KEY is not set; model replies will fail");
    }

    let provider = HuggingFaceProvider::new(config)?;
    let responder = Responder::new(Arc::new(provider));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(responder.respond(message)) {
        Ok(reply) => {
            log::info!("reply source: {}", reply.source.as_str());
            println!("{}", reply.text);
            Ok(())
        }
        Err(e) => {
            println!("{APOLOGY}");
            Err(e.into())
        }
    }
}
