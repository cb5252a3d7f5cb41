// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::source::ReadErrorPolicy;

/// Load application.properties from a freshly cloned git repository
#[derive(Parser)]
#[command(name = "gitconf")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific settings file
    #[arg(short = 'C', long = "config", global = true, env = "GITCONF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clone a repository and print its configuration
    Show(ShowArgs),
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Repository URI (default: source.uri from gitconf.toml)
    #[arg(value_name = "URI")]
    pub uri: Option<String>,

    /// Directory that receives the clone (default: system temp dir)
    #[arg(long, value_name = "DIR")]
    pub temp_root: Option<PathBuf>,

    /// Prefix of the clone directory name
    #[arg(long, value_name = "NAME")]
    pub staging_name: Option<String>,

    /// What to do when application.properties cannot be read
    #[arg(long, value_name = "POLICY")]
    pub on_read_error: Option<ReadErrorPolicy>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print only the value of this key
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,

    /// Delete the clone directory after reading
    #[arg(long)]
    pub remove_clone: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `key=value` lines sorted by key
    #[default]
    Text,
    /// JSON object
    Json,
}
