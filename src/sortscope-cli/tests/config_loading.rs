//! Config files on disk combined with command-line flags.

use std::io::Write;

use clap::Parser;
use pretty_assertions::assert_eq;
use sortscope_cli::config::{self, ConfigError, FileConfig, Validation};
use sortscope_cli::{Cli, sort_cmd};
use sortscope_core::{BarScale, SortOrder, StartPolicy};

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_and_flags_merge() {
    let file = write_config(
        "size = 25\nmax = 90\norder = \"ascending\"\nscale = \"absolute\"\n",
    );
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["sortscope", "--config", path, "--size", "40"]).unwrap();

    let settings = config::load_settings(cli.config.as_deref(), &cli.settings).unwrap();
    assert_eq!(settings.size, 40);
    assert_eq!(settings.max, 90);
    assert_eq!(settings.order, SortOrder::Ascending);
    assert_eq!(settings.scale, BarScale::Absolute);
    assert_eq!(settings.start_policy, StartPolicy::Preempt);
}

#[test]
fn test_explicit_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = FileConfig::load_optional(&path, true).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_default_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    assert_eq!(
        FileConfig::load_optional(&path, false).unwrap(),
        FileConfig::default()
    );
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_config("size = \"many\"\n");
    let err = FileConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_file_values_are_validated() {
    let file = write_config("min = 10\nmax = 5\n");
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["sortscope", "--config", path]).unwrap();
    let err = config::load_settings(cli.config.as_deref(), &cli.settings).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_sort_subcommand_accepts_global_flags() {
    let cli = Cli::try_parse_from(["sortscope", "sort", "bubble", "--size", "15", "--seed", "3"])
        .unwrap();
    assert_eq!(cli.settings.size, Some(15));
    assert_eq!(cli.seed, Some(3));
}

#[test]
fn test_explicit_values_ignore_generation_range() {
    let cli = Cli::try_parse_from([
        "sortscope", "sort", "bubble", "--values", "3,1,2", "--min", "10", "--max", "5", "--descending",
    ])
    .unwrap();
    assert_eq!(cli.validation(), Validation::DelayOnly);

    let settings =
        config::load_settings_with(cli.config.as_deref(), &cli.settings, cli.validation())
            .unwrap();
    let Some(sortscope_cli::Commands::Sort(args)) = &cli.command else {
        panic!("expected the sort command");
    };
    let report = sort_cmd::run(args, &settings, cli.seed).unwrap();
    assert_eq!(report.output, vec![3, 2, 1]);
    assert!(report.outcome.is_completed());
}

#[test]
fn test_generated_array_still_checks_range() {
    let cli = Cli::try_parse_from(["sortscope", "sort", "bubble", "--min", "10", "--max", "5"])
        .unwrap();
    assert_eq!(cli.validation(), Validation::Full);
    let err = config::load_settings_with(cli.config.as_deref(), &cli.settings, cli.validation())
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
