use crate::paths::{BandsitePaths, ConfigError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

// toml_edit para escribir sin perder comentarios del usuario
use toml_edit::{DocumentMut, Item};

/// Lectura/escritura de secciones `[nombre]` del fichero de configuración.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: BandsitePaths,
}

impl TomlConfigBackend {
  pub fn new(paths: BandsitePaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &BandsitePaths {
    &self.paths
  }

  /// Como `load_section`, pero un fichero o sección ausentes dan `None`.
  pub fn load_section_opt<T: DeserializeOwned>(&self, section: &str) -> Result<Option<T>, ConfigError> {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        tracing::debug!(path = %path.display(), "config file not found");
        return Ok(None);
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    toml_val.get(section).map(|table| decode_section(table, section)).transpose()
  }

  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    Ok(self.load_section_opt(section)?.unwrap_or_default())
  }
}

fn decode_section<T: DeserializeOwned>(table: &toml::Value, section: &str) -> Result<T, ConfigError> {
  table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(table, section)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si todavía no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) La sección se serializa aparte con serde y se convierte en tabla.
    let section_str =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 3) Se reemplaza solo esa sección; el resto del fichero queda igual.
    doc[section] = section_item;

    crate::io::atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}
