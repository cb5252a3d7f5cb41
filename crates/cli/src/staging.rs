// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Staging paths for local clones.
//!
//! A staging path is allocated as a uniquely named placeholder file under the
//! temp root, then the placeholder is removed so the clone can create the
//! directory itself. Nothing here deletes a staging directory afterwards.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Allocate a free path under `root` whose file name starts with `prefix`.
pub fn allocate(root: &Path, prefix: &str) -> Result<PathBuf> {
    let placeholder = tempfile::Builder::new()
        .prefix(prefix)
        .tempfile_in(root)
        .map_err(|source| Error::StagingPath { path: root.join(prefix), source })?;
    let path = placeholder.path().to_path_buf();

    placeholder
        .close()
        .map_err(|source| Error::StagingPath { path: path.clone(), source })?;

    debug!("allocated staging path {}", path.display());
    Ok(path)
}

/// Fail unless `path` is absent or an empty directory.
pub fn ensure_free(path: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(source) => return Err(Error::StagingPath { path: path.to_path_buf(), source }),
    };

    if !meta.is_dir() {
        return Err(Error::StagingOccupied { path: path.to_path_buf() });
    }

    let mut entries = fs::read_dir(path)
        .map_err(|source| Error::StagingPath { path: path.to_path_buf(), source })?;
    if entries.next().is_some() {
        return Err(Error::StagingOccupied { path: path.to_path_buf() });
    }

    Ok(())
}

#[cfg(test)]
#[path = "staging_tests.rs"]
mod tests;
