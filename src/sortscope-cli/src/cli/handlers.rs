//! Command execution handlers.

use anyhow::{Context, Result};
use sortscope_core::Settings;

use super::args::{Cli, Commands, LogLevel, SortArgs};
use crate::config;
use crate::logging::{self, LogTarget};
use crate::sort_cmd;

/// Resolves settings, installs logging and runs the selected command.
pub async fn dispatch_command(cli: Cli) -> Result<()> {
    let settings =
        config::load_settings_with(cli.config.as_deref(), &cli.settings, cli.validation())?;

    let (target, default_level) = match &cli.command {
        None => (
            LogTarget::File(cli.log_file.clone().unwrap_or_else(logging::default_log_file)),
            LogLevel::Info,
        ),
        Some(_) => (LogTarget::Stderr, LogLevel::Warn),
    };
    let directive = logging::filter_directive(
        cli.log_level,
        std::env::var(logging::LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
        default_level,
    );
    let _log_guard = logging::init(&target, logging::build_filter(&directive, default_level))?;
    tracing::debug!(?settings, "resolved settings");

    match cli.command {
        None => run_tui(settings, cli.seed, cli.fps).await,
        Some(Commands::Sort(args)) => run_sort(args, settings, cli.seed).await,
    }
}

async fn run_tui(settings: Settings, seed: Option<u64>, fps: u32) -> Result<()> {
    let exit = sortscope_tui::AppRunner::new(settings)
        .with_seed(seed)
        .with_fps(fps)
        .run()
        .await?;
    if let Some(outcome) = exit.last_outcome {
        tracing::info!(
            algorithm = outcome.algorithm.id(),
            completed = outcome.is_completed(),
            "last run"
        );
    }
    Ok(())
}

async fn run_sort(args: SortArgs, settings: Settings, seed: Option<u64>) -> Result<()> {
    let json = args.json;
    let report = tokio::task::spawn_blocking(move || sort_cmd::run(&args, &settings, seed))
        .await
        .context("sort worker panicked")??;

    if json {
        println!("{}", sort_cmd::to_json(&report)?);
    } else {
        println!("{}", sort_cmd::to_text(&report));
    }
    Ok(())
}
