//! Configuration management for Mylib
//!
//! Layered loading with figment: built-in defaults, then the user config
//! (`~/.config/mylib/config.toml`), then the repository config
//! (`mylib.toml`), then an explicit `--config` path, with `MYLIB_`-prefixed
//! environment variables always highest priority.

use anyhow::Result;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::parallel::ParallelConfig;

/// Main configuration structure for Mylib
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MylibConfig {
    /// Worker-pool sizing configuration
    #[serde(default)]
    pub parallel: ParallelConfig,
}

impl MylibConfig {
    /// Load configuration from the standard locations
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// Load configuration, optionally replacing the standard file locations
    /// with an explicit path. Environment variables still apply on top.
    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment.merge(Toml::file(custom_path));
        } else {
            // Standard priority: user config -> repo config
            figment = figment
                .merge(Toml::file(Self::user_config_path()))
                .merge(Toml::file("mylib.toml"));
        }

        // Environment variables always have highest priority
        // (nested keys use double underscores: MYLIB_PARALLEL__MAX_THREADS)
        figment = figment.merge(Env::prefixed("MYLIB_").split("__"));

        Ok(figment.extract()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel.thread_percentage == 0 || self.parallel.thread_percentage > 100 {
            anyhow::bail!(
                "thread_percentage must be between 1 and 100, got {}",
                self.parallel.thread_percentage
            );
        }
        Ok(())
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/mylib/config.toml"),
            Err(_) => "~/.config/mylib/config.toml".to_string(),
        }
    }
}
