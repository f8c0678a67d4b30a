use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "vn-text-trim")]
#[command(version, about = "Simple ITH text cleaner", long_about = None)]
pub struct Cli {
    /// Configuration file [default: executable path with .toml extension]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Validate the configuration and exit
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => default_config_path(),
        }
    }
}

/// `<exe dir>/<exe name>.toml`
pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("Cannot locate the running executable")?;
    Ok(exe.with_extension("toml"))
}
