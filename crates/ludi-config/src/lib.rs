//! # ludi-config
//!
//! Layered configuration loading for the LudiTools content layer using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LUDI_*` prefix, `__` as separator)
//! 2. Legacy `STRAPI_API_URL` / `STRAPI_API_TOKEN` environment variables
//! 3. Project-level `.ludi/config.toml`
//! 4. User-level `~/.config/ludi/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LUDI_CONTENT__BASE_URL` -> `content.base_url`,
//! `LUDI_CONTENT__API_TOKEN` -> `content.api_token`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use ludi_config::LudiConfig;
//!
//! let config = LudiConfig::load_with_dotenv().expect("config");
//! println!("content API: {}", config.content.base_url);
//! ```

mod content;
mod error;
mod general;

pub use content::ContentApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LudiConfig {
    #[serde(default)]
    pub content: ContentApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LudiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the content
    /// API address is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.content.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".ludi/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(Self::legacy_env())
            .merge(Env::prefixed("LUDI_").split("__"))
    }

    /// Unprefixed variables used by existing site deployments.
    fn legacy_env() -> Env {
        Env::raw()
            .only(&["STRAPI_API_URL", "STRAPI_API_TOKEN"])
            .map(|key| {
                if key.as_str().eq_ignore_ascii_case("STRAPI_API_URL") {
                    "content.base_url".into()
                } else {
                    "content.api_token".into()
                }
            })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ludi").join("config.toml"))
    }

    /// Load `.env` from the workspace root, walking up from `CARGO_MANIFEST_DIR`
    /// at most 3 levels before falling back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LudiConfig::default();
        assert_eq!(config.content.base_url, "http://localhost:1337");
        assert!(!config.content.is_authenticated());
        assert_eq!(config.general.locale, "es");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: LudiConfig = LudiConfig::figment().extract()?;
            assert_eq!(config.content.user_agent, "ludi/0.1");
            assert_eq!(config.general.currency_symbol, "$");
            Ok(())
        });
    }
}
