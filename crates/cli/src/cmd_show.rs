// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Show command implementation.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use gitconf::cli::{Cli, OutputFormat, ShowArgs};
use gitconf::config::{self, Settings};
use gitconf::discovery;
use gitconf::loader::{GitConfigLoader, LoaderOptions};
use gitconf::properties::Properties;
use gitconf::source;

/// Run the show command.
pub fn run(cli: &Cli, args: &ShowArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    // Explicit --config wins over discovery
    let settings_path = match &cli.config {
        Some(path) => Some(cwd.join(path)),
        None => discovery::find_settings(&cwd),
    };
    let (settings, base) = match &settings_path {
        Some(path) => {
            let base = path.parent().unwrap_or(cwd.as_path()).to_path_buf();
            (config::load(path)?, base)
        }
        None => (Settings::default(), cwd.clone()),
    };

    let uri = args
        .uri
        .clone()
        .or_else(|| settings.source.uri.clone())
        .context("no repository URI given (pass URI or set source.uri in gitconf.toml)")?;
    let options = merge_options(settings.source.loader_options(&base), args, &cwd);

    let mut loader = GitConfigLoader::open_with(&uri, options)?;
    let clone_path = loader.clone_path().to_path_buf();
    let properties = source::read_once(&mut loader);

    // Remove even if the read failed; the read error is reported first
    let removed = if args.remove_clone { remove_clone(&clone_path) } else { Ok(()) };
    let properties = properties?;
    removed?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match &args.key {
        Some(key) => {
            let value = properties.get(key).with_context(|| format!("key not found: {key}"))?;
            writeln!(handle, "{value}")?;
        }
        None => write_properties(&mut handle, &properties, args.output)?,
    }
    handle.flush()?;
    Ok(())
}

/// Command-line flags override settings.
fn merge_options(mut options: LoaderOptions, args: &ShowArgs, cwd: &Path) -> LoaderOptions {
    if let Some(root) = &args.temp_root {
        options.temp_root = Some(cwd.join(root));
    }
    if let Some(name) = &args.staging_name {
        options.staging_name = Some(name.clone());
    }
    if let Some(policy) = args.on_read_error {
        options.on_read_error = policy;
    }
    options
}

fn remove_clone(path: &Path) -> anyhow::Result<()> {
    std::fs::remove_dir_all(path)
        .with_context(|| format!("failed to remove clone at {}", path.display()))?;
    tracing::debug!("removed clone at {}", path.display());
    Ok(())
}

fn write_properties(
    writer: &mut impl Write,
    properties: &Properties,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (key, value) in properties {
                writeln!(writer, "{key}={value}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, properties)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
