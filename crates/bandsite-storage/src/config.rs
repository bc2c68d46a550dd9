use bandsite_config::{BandsitePaths, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sección `[storage]` de bandsite.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
  pub db_path: PathBuf,
  pub journal_mode: Option<String>,
}

impl StorageConfig {
  /// Base de datos en el directorio de datos, en modo WAL.
  pub fn defaults_for(paths: &BandsitePaths) -> Self {
    StorageConfig { db_path: paths.data_dir.join("bandsite.db"), journal_mode: Some("WAL".to_string()) }
  }

  /// Lee `[storage]`. Si la sección no existe se escriben los valores por
  /// defecto, para que queden visibles en el fichero.
  pub fn load(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    if let Some(cfg) = backend.load_section_opt("storage")? {
      return Ok(cfg);
    }

    let cfg = Self::defaults_for(backend.paths());
    cfg.save(backend)?;
    tracing::info!(db_path = %cfg.db_path.display(), "wrote default [storage] section");
    Ok(cfg)
  }

  pub fn save(&self, backend: &impl ConfigBackend) -> Result<(), ConfigError> {
    backend.save_section("storage", self)
  }
}
