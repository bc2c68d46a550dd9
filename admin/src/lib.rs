pub mod cli;
pub mod commands;
pub mod config;

use anyhow::Context;
use bandsite_config::{BandsitePaths, TomlConfigBackend};
use bandsite_storage::SqliteSlotStorage;

use crate::cli::Cli;
use crate::config::SiteConfig;

/// Wires config, storage and the selected command together.
pub fn run(cli: Cli) -> anyhow::Result<()> {
  let paths = BandsitePaths::detect().context("locating config and data directories")?;
  let backend = TomlConfigBackend::new(paths);
  let site = SiteConfig::load(&backend).context("loading [site] section")?;

  // --- Storage ---
  // `--db` wins over the `[storage]` section of bandsite.toml.
  let storage = match &cli.db {
    Some(path) => SqliteSlotStorage::open_path(path),
    None => SqliteSlotStorage::new_from_config(&backend),
  }
  .context("opening slot storage")?;

  let stdout = std::io::stdout();
  let mut out = stdout.lock();
  commands::execute(cli.command, &storage, &site, backend.paths(), &mut out)
}
