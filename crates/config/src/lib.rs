//! Layered configuration.
//!
//! Values are resolved from, in increasing order of precedence: built-in
//! defaults, a configuration file (TOML, YAML or JSON, chosen by extension),
//! and `JIDX_` prefixed environment variables. Nested keys use a double
//! underscore, e.g. `JIDX_DECODE__LAST_MODIFIED_SCALING=never`.

pub mod error;
mod presets;

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use jidx_format::{DecodePolicy, Decoder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

use crate::error::{ErrorKind, Result};
pub use crate::presets::Presets;

pub const ENV_PREFIX: &str = "JIDX_";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub decode: DecodePolicy,
    pub presets: Presets,
}

impl Config {
    /// A decoder configured with this configuration's policy.
    pub fn decoder(&self) -> Decoder {
        Decoder::new(self.decode)
    }

    /// Load from the platform configuration directory, if a file exists
    /// there, and the environment.
    pub fn load() -> Result<Self> {
        match default_path().filter(|path| path.exists()) {
            Some(path) => Self::load_from(Some(path.as_path())),
            None => Self::load_from(None),
        }
    }

    /// Load from an explicit file, which must exist, and the environment.
    #[instrument]
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            if !path.is_file() {
                exn::bail!(ErrorKind::Invalid(format!("{} is not a file", path.display())));
            }
            figment = match extension(path).as_deref() {
                Some("toml") => figment.merge(Toml::file_exact(path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
                Some("json") => figment.merge(Json::file_exact(path)),
                other => exn::bail!(ErrorKind::UnsupportedFormat(other.unwrap_or_default().to_string())),
            };
            tracing::debug!(path = %path.display(), "merged configuration file");
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR));
        figment.extract().or_raise(|| ErrorKind::Invalid("failed to extract configuration".to_string()))
    }
}

/// `config.toml` in the platform configuration directory.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jidx").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn extension(path: &Path) -> Option<String> {
    path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase)
}
