//! Layered CLI settings
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. TOML file: `--config <path>`, else `./curricula.toml` if present
//! 3. Environment variables: `CURRICULA_*` prefix

use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use curricula_core::logging_facility::Profile;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "curricula.toml";
const ENV_PREFIX: &str = "CURRICULA";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    /// Logging profile passed to `logging_facility::init`
    pub log_profile: Profile,
    /// Indent JSON written to stdout
    pub pretty_json: bool,
    /// Default matching mode for `search`
    pub search_case_sensitive: bool,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            log_profile: Profile::Development,
            pretty_json: true,
            search_case_sensitive: false,
        }
    }
}

impl CliSettings {
    /// Load settings for this process
    ///
    /// # Errors
    /// An explicit `config_path` that is missing or unreadable, malformed TOML,
    /// or a value of the wrong type in any layer.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(
            config_path,
            Path::new(DEFAULT_CONFIG_FILE),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn load_from(
        config_path: Option<&Path>,
        fallback: &Path,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let defaults = CliSettings::default();

        let file = match config_path {
            Some(path) => File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            None => File::new(&fallback.to_string_lossy(), FileFormat::Toml).required(false),
        };

        Config::builder()
            .set_default("log_profile", "development")?
            .set_default("pretty_json", defaults.pretty_json)?
            .set_default("search_case_sensitive", defaults.search_case_sensitive)?
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
