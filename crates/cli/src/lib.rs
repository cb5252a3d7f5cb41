// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gitconf: load `application.properties` from a freshly cloned git repository.
//!
//! ```no_run
//! use gitconf::{GitConfigLoader, LoaderOptions, ReadErrorPolicy};
//!
//! let options = LoaderOptions::default().on_read_error(ReadErrorPolicy::Propagate);
//! let mut loader = GitConfigLoader::open_with("https://example.com/config.git", options)?;
//! let properties = loader.configuration()?;
//! loader.close()?;
//! # Ok::<(), gitconf::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod logging;
pub mod properties;
pub mod source;
pub mod staging;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, ReadError, Result};
pub use loader::{GitConfigLoader, LoaderOptions, LoaderState};
pub use properties::Properties;
pub use source::{ConfigSource, ReadErrorPolicy};
