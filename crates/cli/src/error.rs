// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for loading configuration from a git repository.

use std::io;
use std::path::PathBuf;

use crate::properties::ParseError;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while staging, cloning, reading, or releasing a clone.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The staging path could not be allocated or cleared.
    #[error("unable to prepare staging path {}: {source}", .path.display())]
    StagingPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The staging path already holds a non-empty directory.
    #[error("staging path {} is already occupied", .path.display())]
    StagingOccupied { path: PathBuf },

    /// Cloning the remote repository failed.
    #[error("unable to clone repository {uri}: {source}")]
    Clone {
        uri: String,
        #[source]
        source: git2::Error,
    },

    /// The properties file was missing, unreadable, or malformed.
    #[error("unable to read configuration from {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    /// Releasing the clone resource failed.
    #[error("unable to release clone at {}: {source}", .path.display())]
    Release {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Cause of a [`Error::ConfigRead`].
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// True for errors raised while constructing a loader.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::StagingPath { .. } | Error::StagingOccupied { .. } | Error::Clone { .. }
        )
    }
}
