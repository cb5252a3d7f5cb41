// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file (`gitconf.toml`) parsing.
//!
//! ```toml
//! version = 1
//!
//! [source]
//! uri = "https://example.com/config.git"
//! temp_root = "/var/tmp"
//! staging_name = "my-app-config"
//! on_read_error = "propagate"
//! ```

pub mod defaults;

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::loader::LoaderOptions;
use crate::source::ReadErrorPolicy;

/// Top-level settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Settings format version (must be 1).
    pub version: u32,

    /// Where configuration is cloned from.
    #[serde(default)]
    pub source: SourceSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self { version: defaults::SETTINGS_VERSION, source: SourceSettings::default() }
    }
}

/// `[source]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSettings {
    /// Repository URI used when none is given on the command line.
    #[serde(default)]
    pub uri: Option<String>,

    /// Directory that receives staging directories.
    #[serde(default)]
    pub temp_root: Option<PathBuf>,

    /// Prefix of staging directory names.
    #[serde(default)]
    pub staging_name: Option<String>,

    /// Read-error policy (`return-empty` or `propagate`).
    #[serde(default)]
    pub on_read_error: Option<ReadErrorPolicy>,
}

impl SourceSettings {
    /// Loader options described by these settings.
    ///
    /// Relative `temp_root` values resolve against `base`.
    pub fn loader_options(&self, base: &Path) -> LoaderOptions {
        LoaderOptions {
            temp_root: self.temp_root.as_ref().map(|root| base.join(root)),
            staging_name: self.staging_name.clone(),
            on_read_error: self.on_read_error.unwrap_or_default(),
        }
    }
}

/// Parse settings from TOML text.
pub fn parse(content: &str) -> anyhow::Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    if settings.version != defaults::SETTINGS_VERSION {
        anyhow::bail!(
            "unsupported settings version {} (expected {})",
            settings.version,
            defaults::SETTINGS_VERSION
        );
    }
    Ok(settings)
}

/// Load settings from a file.
pub fn load(path: &Path) -> anyhow::Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let settings =
        parse(&content).with_context(|| format!("invalid settings in {}", path.display()))?;
    tracing::debug!("loaded settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
