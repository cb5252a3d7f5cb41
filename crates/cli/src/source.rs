// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration source abstraction.

use serde::Deserialize;

use crate::error::Result;
use crate::properties::Properties;

/// A place configuration is read from.
pub trait ConfigSource {
    /// Read the current configuration.
    fn configuration(&self) -> Result<Properties>;

    /// Release the resources held by the source.
    fn close(&mut self) -> Result<()>;
}

/// What a source does when the configuration cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReadErrorPolicy {
    /// Log the failure and return the entries parsed so far (usually none).
    ///
    /// A misconfigured repository then looks like an empty configuration
    /// to the caller.
    #[default]
    ReturnEmpty,
    /// Return the failure to the caller.
    Propagate,
}

/// Read the configuration once, then close the source.
///
/// The source is closed even when the read fails; the read error wins.
pub fn read_once(source: &mut dyn ConfigSource) -> Result<Properties> {
    let properties = source.configuration();
    let closed = source.close();
    let properties = properties?;
    closed?;
    Ok(properties)
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
