//! Where `mas` finds its activity data and which address `mas serve` binds.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults (the per-user data directory, `127.0.0.1:8080`)
//! 2. `config.toml` in the per-user `mas` config directory
//! 3. the file passed with `--config`
//! 4. `MAS_DATA_PATH` and `MAS_BIND`
//!
//! `--data` and `serve --bind` are applied on top by the caller.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Activity data file inside the per-user data directory.
const DATA_FILE_NAME: &str = "imaging_activities.json";

const CONFIG_FILE_NAME: &str = "config.toml";

/// `MAS_DATA_PATH` overrides `data_path`, `MAS_BIND` overrides `bind`.
const ENV_PREFIX: &str = "MAS_";

/// Resolved settings for one `mas` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file of imaging activities read on every query.
    pub data_path: PathBuf,

    /// Listen address for `mas serve`.
    pub bind: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_path: data_dir.join(DATA_FILE_NAME),
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

impl Config {
    /// Resolves the data file and listen address from every source.
    ///
    /// A missing `config.toml` is skipped; a present but malformed one, or an
    /// unparsable `MAS_BIND`, is an error.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut layers = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_config) = dirs_config_path().map(|dir| dir.join(CONFIG_FILE_NAME)) {
            layers = layers.merge(Toml::file(user_config));
        }
        if let Some(path) = config_path {
            layers = layers.merge(Toml::file(path));
        }

        layers.merge(Env::prefixed(ENV_PREFIX)).extract()
    }
}

/// Directory holding the user's `config.toml` (`~/.config/mas` on Linux).
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mas"))
}

/// Default home of the activity data file (`~/.local/share/mas` on Linux).
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("mas"))
}
