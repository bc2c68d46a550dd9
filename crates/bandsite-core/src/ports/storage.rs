use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Slot con el snapshot JSON del `ContentDocument`.
pub const CONTENT_SLOT: &str = "bandsite.content";
/// Slot con el identificador del tema seleccionado.
pub const THEME_SLOT: &str = "bandsite.theme";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
  #[error("storage unavailable: {0}")]
  Unavailable(String),

  #[error("storage backend error: {0}")]
  Backend(String),
}

/// Port de almacenamiento clave/valor local (equivalente a `localStorage`).
///
/// Las operaciones son síncronas y toman `&self`: las implementaciones usan
/// mutabilidad interior, así varios stores pueden compartir el mismo backend.
pub trait SlotStorage {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
  fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    (**self).get_item(key)
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
    (**self).set_item(key, value)
  }

  fn remove_item(&self, key: &str) -> Result<(), StorageError> {
    (**self).remove_item(key)
  }
}

impl<S: SlotStorage + ?Sized> SlotStorage for Rc<S> {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    (**self).get_item(key)
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
    (**self).set_item(key, value)
  }

  fn remove_item(&self, key: &str) -> Result<(), StorageError> {
    (**self).remove_item(key)
  }
}

/// Almacenamiento en memoria, vive lo que viva el proceso.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Crea el almacenamiento con un slot ya escrito.
  pub fn with_item(key: &str, value: &str) -> Self {
    let storage = Self::new();
    storage.slots.borrow_mut().insert(key.to_string(), value.to_string());
    storage
  }

  pub fn len(&self) -> usize {
    self.slots.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.slots.borrow().is_empty()
  }
}

impl SlotStorage for MemoryStorage {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    Ok(self.slots.borrow().get(key).cloned())
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
    self.slots.borrow_mut().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove_item(&self, key: &str) -> Result<(), StorageError> {
    self.slots.borrow_mut().remove(key);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_memory_storage_semantics() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("a").unwrap(), None);

    storage.set_item("a", "1").unwrap();
    storage.set_item("a", "2").unwrap();
    assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("2"));
    assert_eq!(storage.len(), 1);

    storage.remove_item("a").unwrap();
    storage.remove_item("a").unwrap();
    assert!(storage.is_empty());
  }

  #[test]
  fn test_shared_handle_sees_same_slots() {
    let storage = Rc::new(MemoryStorage::new());
    let other = Rc::clone(&storage);

    other.set_item(THEME_SLOT, "modern").unwrap();
    assert_eq!(storage.get_item(THEME_SLOT).unwrap().as_deref(), Some("modern"));
    assert_eq!((&*storage).get_item(CONTENT_SLOT).unwrap(), None);
  }
}
