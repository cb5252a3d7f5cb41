// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration read from a fresh clone of a git repository.
//!
//! Opening a loader clones the repository's default branch into a new
//! staging directory. Each call to [`GitConfigLoader::configuration`] then
//! re-reads `application.properties` from the clone root. The clone
//! directory outlives the loader; [`GitConfigLoader::close`] only releases
//! the repository handle.

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{debug, info, warn};

use crate::config::defaults;
use crate::error::{Error, ReadError, Result};
use crate::properties::{self, Properties};
use crate::source::{ConfigSource, ReadErrorPolicy};
use crate::staging;

/// Options for [`GitConfigLoader::open_with`].
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Directory that receives the staging directory (default: system temp dir).
    pub temp_root: Option<PathBuf>,
    /// Prefix of the staging directory name.
    pub staging_name: Option<String>,
    /// Behavior when the properties file cannot be read.
    pub on_read_error: ReadErrorPolicy,
}

impl LoaderOptions {
    pub fn temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }

    pub fn staging_name(mut self, name: impl Into<String>) -> Self {
        self.staging_name = Some(name.into());
        self
    }

    pub fn on_read_error(mut self, policy: ReadErrorPolicy) -> Self {
        self.on_read_error = policy;
        self
    }
}

/// Lifecycle of an opened loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Ready,
    Closed,
}

/// Configuration source backed by a local clone of a git repository.
pub struct GitConfigLoader {
    uri: String,
    clone_path: PathBuf,
    on_read_error: ReadErrorPolicy,
    repo: Option<Repository>,
}

impl GitConfigLoader {
    /// Clone `uri` into a staging directory under the system temp dir.
    pub fn open(uri: &str) -> Result<Self> {
        Self::open_with(uri, LoaderOptions::default())
    }

    /// Clone `uri` into a staging directory chosen by `options`.
    ///
    /// Blocks until the clone finishes. Fails with a staging error when no
    /// free path can be prepared, or a clone error for any transport,
    /// authentication or lookup failure.
    pub fn open_with(uri: &str, options: LoaderOptions) -> Result<Self> {
        if uri.trim().is_empty() {
            return Err(Error::Clone {
                uri: uri.to_string(),
                source: git2::Error::from_str("repository URI is empty"),
            });
        }

        let root = options.temp_root.unwrap_or_else(std::env::temp_dir);
        let prefix = options.staging_name.as_deref().unwrap_or(defaults::STAGING_NAME);
        let clone_path = staging::allocate(&root, prefix)?;
        let repo = clone_into(uri, &clone_path)?;

        info!("cloned {} into {}", uri, clone_path.display());
        Ok(Self {
            uri: uri.to_string(),
            clone_path,
            on_read_error: options.on_read_error,
            repo: Some(repo),
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Root of the working tree of the clone.
    pub fn clone_path(&self) -> &Path {
        &self.clone_path
    }

    pub fn state(&self) -> LoaderState {
        match self.repo {
            Some(_) => LoaderState::Ready,
            None => LoaderState::Closed,
        }
    }

    /// Path of the properties file inside the clone.
    pub fn properties_path(&self) -> PathBuf {
        self.clone_path.join(defaults::PROPERTIES_FILE)
    }

    /// Parse `application.properties` from the clone root.
    ///
    /// The read only touches the working tree, so it keeps working after
    /// [`close`](Self::close) as long as the clone is on disk.
    ///
    /// Under [`ReadErrorPolicy::ReturnEmpty`] read failures are logged and
    /// never returned; the result holds whatever was parsed before the
    /// failure.
    pub fn configuration(&self) -> Result<Properties> {
        let mut properties = Properties::new();
        match self.read_into(&mut properties) {
            Ok(()) => Ok(properties),
            Err(err) => match self.on_read_error {
                ReadErrorPolicy::Propagate => Err(err),
                ReadErrorPolicy::ReturnEmpty => {
                    warn!("ignoring configuration read failure: {}", err);
                    Ok(properties)
                }
            },
        }
    }

    fn read_into(&self, properties: &mut Properties) -> Result<()> {
        let path = self.properties_path();
        let bytes = fs::read(&path)
            .map_err(|e| Error::ConfigRead { path: path.clone(), source: ReadError::from(e) })?;
        properties::load_into(properties, &properties::decode(&bytes))
            .map_err(|e| Error::ConfigRead { path, source: ReadError::from(e) })?;

        debug!("read {} entries from {}", properties.len(), self.uri);
        Ok(())
    }

    /// Release the repository handle. The clone directory is left on disk.
    ///
    /// Fails when the clone's git directory has disappeared. A second call
    /// does nothing.
    pub fn close(&mut self) -> Result<()> {
        let Some(repo) = self.repo.take() else {
            debug!("{} already closed", self.clone_path.display());
            return Ok(());
        };

        let git_dir = repo.path().to_path_buf();
        drop(repo);
        fs::metadata(&git_dir).map_err(|source| Error::Release { path: git_dir, source })?;

        debug!("released clone at {}", self.clone_path.display());
        Ok(())
    }
}

impl ConfigSource for GitConfigLoader {
    fn configuration(&self) -> Result<Properties> {
        GitConfigLoader::configuration(self)
    }

    fn close(&mut self) -> Result<()> {
        GitConfigLoader::close(self)
    }
}

/// Clone the default branch of `uri` into `path`, which must be free.
pub(crate) fn clone_into(uri: &str, path: &Path) -> Result<Repository> {
    staging::ensure_free(path)?;

    debug!("cloning {} into {}", uri, path.display());
    Repository::clone(uri, path)
        .map_err(|source| Error::Clone { uri: uri.to_string(), source })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
