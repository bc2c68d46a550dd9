pub mod config;
pub mod models;
pub mod schema;

use std::cell::RefCell;
use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use bandsite_config::TomlConfigBackend;
use bandsite_core::ports::{SlotStorage, StorageError};

pub use crate::config::StorageConfig;
use crate::models::{NewSlotRow, SlotRow};
use crate::schema::slots;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Almacenamiento de slots sobre SQLite.
///
/// Es el equivalente persistente del `localStorage` del navegador: una tabla
/// `slots(name, contents)` con un valor de texto por clave.
pub struct SqliteSlotStorage {
  conn: RefCell<SqliteConnection>,
}

impl SqliteSlotStorage {
  /// Abre (o crea) la base de datos y aplica las migraciones pendientes.
  pub fn open(database_url: &str) -> Result<Self, StorageError> {
    let mut conn =
      SqliteConnection::establish(database_url).map_err(|e| StorageError::Unavailable(e.to_string()))?;

    conn.run_pending_migrations(MIGRATIONS).map_err(|e| StorageError::Backend(format!("migrations: {e}")))?;
    tracing::debug!(database_url, "slot storage ready");

    Ok(Self { conn: RefCell::new(conn) })
  }

  pub fn open_path(path: &Path) -> Result<Self, StorageError> {
    Self::open(&path.to_string_lossy())
  }

  /// Base de datos en memoria; se pierde al soltar el valor.
  pub fn in_memory() -> Result<Self, StorageError> {
    Self::open(":memory:")
  }

  /// Abre la base de datos indicada en la sección `[storage]`.
  pub fn new_from_config(backend: &TomlConfigBackend) -> Result<Self, StorageError> {
    let cfg = StorageConfig::load(backend).map_err(|e| StorageError::Unavailable(e.to_string()))?;
    Self::with_config(&cfg)
  }

  pub fn with_config(cfg: &StorageConfig) -> Result<Self, StorageError> {
    let storage = Self::open_path(&cfg.db_path)?;
    if let Some(mode) = &cfg.journal_mode {
      storage.set_journal_mode(mode)?;
    }
    Ok(storage)
  }

  fn set_journal_mode(&self, mode: &str) -> Result<(), StorageError> {
    const MODES: &[&str] = &["DELETE", "TRUNCATE", "PERSIST", "MEMORY", "WAL", "OFF"];

    let mode = mode.to_ascii_uppercase();
    if !MODES.contains(&mode.as_str()) {
      tracing::warn!(mode = %mode, "ignoring unknown journal_mode");
      return Ok(());
    }

    self
      .conn
      .borrow_mut()
      .batch_execute(&format!("PRAGMA journal_mode = {mode};"))
      .map_err(|e| StorageError::Backend(e.to_string()))
  }
}

impl SlotStorage for SqliteSlotStorage {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    let mut conn = self.conn.borrow_mut();

    let row = slots::table
      .find(key)
      .first::<SlotRow>(&mut *conn)
      .optional()
      .map_err(|e| StorageError::Backend(e.to_string()))?;

    Ok(row.map(|row| row.contents))
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
    let mut conn = self.conn.borrow_mut();

    diesel::insert_into(slots::table)
      .values(&NewSlotRow { name: key, contents: value })
      .on_conflict(slots::name)
      .do_update()
      .set(slots::contents.eq(value))
      .execute(&mut *conn)
      .map_err(|e| StorageError::Backend(e.to_string()))?;

    Ok(())
  }

  fn remove_item(&self, key: &str) -> Result<(), StorageError> {
    let mut conn = self.conn.borrow_mut();

    diesel::delete(slots::table.filter(slots::name.eq(key)))
      .execute(&mut *conn)
      .map_err(|e| StorageError::Backend(e.to_string()))?;

    Ok(())
  }
}
