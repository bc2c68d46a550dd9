use bandsite_config::{ConfigError, TomlConfigBackend};
use bandsite_core::domain::Theme;
use serde::{Deserialize, Serialize};

/// Sección `[site]` de bandsite.toml.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
  /// Tema usado cuando el slot de tema está vacío o es desconocido.
  #[serde(default)]
  pub default_theme: Theme,
}

impl SiteConfig {
  pub fn load(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    backend.load_section_with_default("site")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bandsite_config::BandsitePaths;
  use tempfile::tempdir;

  #[test]
  fn test_site_section_selects_default_theme() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(BandsitePaths::rooted(tmp.path()).unwrap());
    assert_eq!(SiteConfig::load(&backend).unwrap().default_theme, Theme::Atmospheric);

    std::fs::write(backend.paths().config_file(), "[site]\ndefault_theme = \"raw\"\n").unwrap();
    assert_eq!(SiteConfig::load(&backend).unwrap().default_theme, Theme::Raw);
  }
}
