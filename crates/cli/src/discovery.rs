// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file discovery.
//!
//! Settings are looked up in the working directory and its ancestors, stopping
//! at the root of the enclosing git repository.

use std::path::{Path, PathBuf};

use crate::config::defaults::SETTINGS_FILE;

/// Nearest gitconf.toml at or above `start_dir`.
///
/// The directory holding `.git` is the last one searched.
pub fn find_settings(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(SETTINGS_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
