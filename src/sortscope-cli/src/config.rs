//! Config file loading and settings resolution.
//!
//! Settings come from three layers, later ones winning:
//! built-in defaults, the TOML config file, and command-line flags.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sortscope_core::{BarScale, Settings, SettingsError, SortOrder, StartPolicy};
use thiserror::Error;

use crate::cli::SettingsArgs;

// ============================================================
// CONSTANTS
// ============================================================

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SORTSCOPE_CONFIG";

/// Directory under the platform config dir.
pub const CONFIG_DIR: &str = "sortscope";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

// ============================================================
// ERRORS
// ============================================================

/// Failure to produce valid settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The merged settings are out of bounds.
    #[error("invalid settings")]
    Invalid(#[from] SettingsError),
}

// ============================================================
// FILE CONFIG
// ============================================================

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Number of elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Smallest generated value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    /// Largest generated value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    /// Pause after each step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Bar scaling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<BarScale>,
    /// Behaviour when a sort starts during another.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_policy: Option<StartPolicy>,
}

impl FileConfig {
    /// Parses TOML text. `path` is only used in errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Loads the file, treating a missing default file as empty.
    ///
    /// An explicitly requested file must exist.
    pub fn load_optional(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Writes the keys that are set over `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(size) = self.size {
            settings.size = size;
        }
        if let Some(min) = self.min {
            settings.min = min;
        }
        if let Some(max) = self.max {
            settings.max = max;
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.delay_ms = delay_ms;
        }
        if let Some(order) = self.order {
            settings.order = order;
        }
        if let Some(scale) = self.scale {
            settings.scale = scale;
        }
        if let Some(policy) = self.start_policy {
            settings.start_policy = policy;
        }
    }
}

// ============================================================
// RESOLUTION
// ============================================================

/// Picks the config path: the flag, then `$SORTSCOPE_CONFIG`, then the
/// platform config dir. The flag marks the path as explicit.
pub fn config_path(
    flag: Option<&Path>,
    env: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Option<(PathBuf, bool)> {
    if let Some(path) = flag {
        return Some((path.to_path_buf(), true));
    }
    if let Some(path) = env.filter(|v| !v.is_empty()) {
        return Some((PathBuf::from(path), true));
    }
    config_dir.map(|dir| (dir.join(CONFIG_DIR).join(CONFIG_FILE), false))
}

/// Applies command-line overrides.
pub fn apply_args(args: &SettingsArgs, settings: &mut Settings) {
    if let Some(size) = args.size {
        settings.size = size;
    }
    if let Some(min) = args.min {
        settings.min = min;
    }
    if let Some(max) = args.max {
        settings.max = max;
    }
    if let Some(delay) = args.delay {
        settings.delay_ms = delay;
    }
    if let Some(order) = args.order() {
        settings.order = order;
    }
    if let Some(scale) = args.scale {
        settings.scale = scale;
    }
    if let Some(policy) = args.policy {
        settings.start_policy = policy.into();
    }
}

/// Which resolved settings the selected command relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Size, value range and delay.
    #[default]
    Full,
    /// Delay only. Used when the command supplies its own values.
    DelayOnly,
}

/// Merges defaults, the file and the flags, then validates everything.
pub fn resolve(file: &FileConfig, args: &SettingsArgs) -> Result<Settings, ConfigError> {
    resolve_with(file, args, Validation::Full)
}

/// Merges defaults, the file and the flags, then validates per `validation`.
pub fn resolve_with(
    file: &FileConfig,
    args: &SettingsArgs,
    validation: Validation,
) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    file.apply(&mut settings);
    apply_args(args, &mut settings);
    match validation {
        Validation::Full => settings.validate()?,
        Validation::DelayOnly => settings.validate_delay()?,
    }
    Ok(settings)
}

/// Loads the config file selected by `flag` and the environment, then resolves.
pub fn load_settings(flag: Option<&Path>, args: &SettingsArgs) -> Result<Settings, ConfigError> {
    load_settings_with(flag, args, Validation::Full)
}

/// [`load_settings`] with a chosen [`Validation`].
pub fn load_settings_with(
    flag: Option<&Path>,
    args: &SettingsArgs,
    validation: Validation,
) -> Result<Settings, ConfigError> {
    let file = match config_path(flag, std::env::var_os(CONFIG_ENV), dirs::config_dir()) {
        Some((path, explicit)) => FileConfig::load_optional(&path, explicit)?,
        None => FileConfig::default(),
    };
    resolve_with(&file, args, validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sortscope_core::ArrayError;
    use sortscope_core::settings::MAX_DELAY_MS;

    #[test]
    fn test_parse_full_file() {
        let text = r#"
            size = 30
            min = -10
            max = 10
            delay_ms = 120
            order = "ascending"
            scale = "absolute"
            start_policy = "reject"
        "#;
        let config = FileConfig::parse(text, Path::new("config.toml")).unwrap();
        assert_eq!(config.size, Some(30));
        assert_eq!(config.order, Some(SortOrder::Ascending));
        assert_eq!(config.scale, Some(BarScale::Absolute));
        assert_eq!(config.start_policy, Some(StartPolicy::Reject));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = FileConfig::parse("colour = \"red\"", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.to_string(), "failed to parse config file c.toml");
    }

    #[test]
    fn test_precedence_defaults_file_flags() {
        let file = FileConfig {
            size: Some(30),
            delay_ms: Some(120),
            ..FileConfig::default()
        };
        let args = SettingsArgs {
            size: Some(70),
            ascending: true,
            ..SettingsArgs::default()
        };
        let settings = resolve(&file, &args).unwrap();
        assert_eq!(settings.size, 70);
        assert_eq!(settings.delay_ms, 120);
        assert_eq!(settings.order, SortOrder::Ascending);
        assert_eq!(settings.min, Settings::default().min);
    }

    #[test]
    fn test_invalid_merge_is_rejected() {
        let args = SettingsArgs {
            min: Some(500),
            ..SettingsArgs::default()
        };
        let err = resolve(&FileConfig::default(), &args).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SettingsError::Array(ArrayError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_delay_only_skips_range_check() {
        let args = SettingsArgs {
            min: Some(10),
            max: Some(5),
            ..SettingsArgs::default()
        };
        let settings = resolve_with(&FileConfig::default(), &args, Validation::DelayOnly).unwrap();
        assert_eq!((settings.min, settings.max), (10, 5));

        let args = SettingsArgs {
            min: Some(10),
            max: Some(5),
            delay: Some(MAX_DELAY_MS + 1),
            ..SettingsArgs::default()
        };
        let err = resolve_with(&FileConfig::default(), &args, Validation::DelayOnly).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SettingsError::DelayTooLong { .. })
        ));
    }

    #[test]
    fn test_config_path_order() {
        let flag = PathBuf::from("/tmp/flag.toml");
        let env = OsString::from("/tmp/env.toml");
        let dir = PathBuf::from("/home/u/.config");

        assert_eq!(
            config_path(Some(&flag), Some(env.clone()), Some(dir.clone())),
            Some((flag.clone(), true))
        );
        assert_eq!(
            config_path(None, Some(env), Some(dir.clone())),
            Some((PathBuf::from("/tmp/env.toml"), true))
        );
        assert_eq!(
            config_path(None, Some(OsString::new()), Some(dir)),
            Some((PathBuf::from("/home/u/.config/sortscope/config.toml"), false))
        );
        assert_eq!(config_path(None, None, None), None);
    }
}
