//! Configuration management for Depictor.
//!
//! Parses `depictor.toml` with serde and auto-discovers it in the current
//! directory or its parents. CLI settings are applied during load via
//! [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Every string in the `[depiction]` section supports `${VAR}` and
//! `${VAR:-default}` expansion.

mod expand;

use std::path::{Path, PathBuf};

use depictor_tabs::{
    DEFAULT_API_URL, DEFAULT_DONATE_LINK, DEFAULT_DONATE_TEXT, DEFAULT_MIN_VERSION,
    DEFAULT_WEB_DEPICTION_URL, DepictionConstants,
};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "depictor.toml";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub pretty: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package sources (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Output location (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Values interpolated into every depiction.
    pub depiction: DepictionConfig,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub paths: PathsConfig,
    /// Whether JSON output is pretty-printed (set after loading).
    #[serde(skip)]
    pub pretty: bool,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    pretty: Option<bool>,
}

/// Resolved directories with absolute paths.
#[derive(Debug, Default)]
pub struct PathsConfig {
    /// Directory whose subdirectories are packages.
    pub source_dir: PathBuf,
    /// Directory depictions are written to.
    pub output_dir: PathBuf,
}

/// `[depiction]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DepictionConfig {
    pub api_url: String,
    pub web_depiction_url: String,
    pub donate_text: String,
    pub donate_link: String,
    pub min_version: String,
    pub tint_color: Option<String>,
    pub escape_url_components: bool,
}

impl Default for DepictionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            web_depiction_url: DEFAULT_WEB_DEPICTION_URL.to_owned(),
            donate_text: DEFAULT_DONATE_TEXT.to_owned(),
            donate_link: DEFAULT_DONATE_LINK.to_owned(),
            min_version: DEFAULT_MIN_VERSION.to_owned(),
            tint_color: None,
            escape_url_components: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`depiction.api_url`").
        field: String,
        /// Error message (e.g., "${`CDN_HOST`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(url, field)?;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `depictor.toml` in the current directory and parents, falling back
    /// to defaults relative to the current directory.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Constants for the tab builder.
    #[must_use]
    pub fn depiction_constants(&self) -> DepictionConstants {
        let d = &self.depiction;
        DepictionConstants {
            api_url: d.api_url.trim_end_matches('/').to_owned(),
            web_depiction_url: d.web_depiction_url.clone(),
            donate_text: d.donate_text.clone(),
            donate_link: d.donate_link.clone(),
            min_version: d.min_version.clone(),
            tint_color: d.tint_color.clone(),
            escape_url_components: d.escape_url_components,
        }
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.paths.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.paths.output_dir.clone_from(output_dir);
        }
        if let Some(pretty) = settings.pretty {
            self.pretty = pretty;
        }
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            source: SourceConfigRaw::default(),
            output: OutputConfigRaw::default(),
            depiction: DepictionConfig::default(),
            paths: PathsConfig {
                source_dir: base.join("packages"),
                output_dir: base.join("depictions"),
            },
            pretty: true,
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.depiction;
        require_http_url(&d.api_url, "depiction.api_url")?;
        require_http_url(&d.web_depiction_url, "depiction.web_depiction_url")?;
        require_http_url(&d.donate_link, "depiction.donate_link")?;
        require_non_empty(&d.donate_text, "depiction.donate_text")?;
        require_non_empty(&d.min_version, "depiction.min_version")?;
        if let Some(tint) = &d.tint_color {
            require_non_empty(tint, "depiction.tint_color")?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let d = &mut self.depiction;
        d.api_url = expand::expand_env(&d.api_url, "depiction.api_url")?;
        d.web_depiction_url =
            expand::expand_env(&d.web_depiction_url, "depiction.web_depiction_url")?;
        d.donate_text = expand::expand_env(&d.donate_text, "depiction.donate_text")?;
        d.donate_link = expand::expand_env(&d.donate_link, "depiction.donate_link")?;
        d.min_version = expand::expand_env(&d.min_version, "depiction.min_version")?;
        if let Some(ref tint) = d.tint_color {
            d.tint_color = Some(expand::expand_env(tint, "depiction.tint_color")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.paths = PathsConfig {
            source_dir: resolve(self.source.dir.as_deref(), "packages"),
            output_dir: resolve(self.output.dir.as_deref(), "depictions"),
        };
        self.pretty = self.output.pretty.unwrap_or(true);
    }
}
