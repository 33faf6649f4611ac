use anyhow::Context;
use clap::Parser;
use topicguard_core::api::AppConfig;
use topicguard_core::config;
use tracing_subscriber::EnvFilter;

mod commands;
mod stdio;

use commands::cli;
use commands::validate;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = match args.config.as_deref() {
        Some(path) => config::load_from(path),
        None => config::load_default(),
    }
    .context("failed to load config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    apply_arg_overrides(&mut cfg, &args);

    let classifier =
        topicguard_plugins::build_classifier(&cfg).context("failed to set up classifier")?;

    let line = validate::dispatch(&classifier, &args.action, args.format, || {
        match args.text.as_deref() {
            None | Some("-") => stdio::read_stdin_text().context("failed to read stdin"),
            Some(text) => Ok(text.to_string()),
        }
    })?;
    if let Some(line) = line {
        println!("{line}");
    }
    Ok(())
}

fn apply_arg_overrides(cfg: &mut AppConfig, args: &cli::Args) {
    if let Some(mode) = args.match_mode {
        cfg.match_mode = mode.into();
    }
    if let Some(tokenizer) = args.tokenizer {
        cfg.tokenizer = tokenizer.into();
    }
}
