// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values.

/// Prefix of staging directory names when none is configured.
pub const STAGING_NAME: &str = "gitconf-config-git-config-repository";

/// Properties file read from the clone root.
pub const PROPERTIES_FILE: &str = "application.properties";

/// Settings file looked up by the CLI.
pub const SETTINGS_FILE: &str = "gitconf.toml";

/// Only supported settings file version.
pub const SETTINGS_VERSION: u32 = 1;
