use tracing::{debug, warn};

use crate::domain::{Palette, Theme};
use crate::ports::{SlotStorage, StorageError, THEME_SLOT};

/// Tema seleccionado, persistido en su propio slot.
pub struct ThemeStore<S: SlotStorage> {
  storage: S,
  theme: Theme,
}

impl<S: SlotStorage> ThemeStore<S> {
  /// Lee el slot del tema. Valores desconocidos o ilegibles se ignoran.
  pub fn load(storage: S) -> Self {
    Self::load_with_default(storage, Theme::default())
  }

  pub fn load_with_default(storage: S, fallback: Theme) -> Self {
    let theme = match storage.get_item(THEME_SLOT) {
      Ok(Some(id)) => Theme::from_id(&id).unwrap_or_else(|| {
        warn!(theme = %id, "unknown stored theme, using default");
        fallback
      }),
      Ok(None) => fallback,
      Err(e) => {
        warn!(error = %e, "could not read stored theme, using default");
        fallback
      }
    };
    Self { storage, theme }
  }

  pub fn theme(&self) -> Theme {
    self.theme
  }

  pub fn palette(&self) -> Palette {
    self.theme.palette()
  }

  pub fn select(&mut self, theme: Theme) -> Result<(), StorageError> {
    self.storage.set_item(THEME_SLOT, theme.id())?;
    self.theme = theme;
    debug!(theme = %theme, "theme selected");
    Ok(())
  }
}
