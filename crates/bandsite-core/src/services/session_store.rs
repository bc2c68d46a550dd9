use tracing::{debug, info};

use crate::domain::{SessionPhase, SessionState};

/// Contraseña de administración fijada al compilar.
///
/// Se puede sobrescribir con `BANDSITE_ADMIN_PASSWORD` en tiempo de build.
/// Es una cadena estática en el cliente: no protege nada frente a alguien
/// que quiera leerla.
pub const ADMIN_PASSWORD: &str = match option_env!("BANDSITE_ADMIN_PASSWORD") {
  Some(password) => password,
  None => "cosmicvoid666",
};

/// Mensaje visible cuando la contraseña no coincide.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid password";

/// Store de sesión: autenticación y modo edición.
///
/// Arranca siempre sin sesión y no se persiste.
#[derive(Debug, Clone)]
pub struct SessionStore {
  secret: String,
  state: SessionState,
}

impl Default for SessionStore {
  fn default() -> Self {
    Self::new()
  }
}

impl SessionStore {
  pub fn new() -> Self {
    Self::with_secret(ADMIN_PASSWORD)
  }

  pub fn with_secret(secret: impl Into<String>) -> Self {
    Self { secret: secret.into(), state: SessionState::default() }
  }

  pub fn state(&self) -> SessionState {
    self.state
  }

  pub fn phase(&self) -> SessionPhase {
    self.state.phase()
  }

  pub fn is_authenticated(&self) -> bool {
    self.state.is_authenticated
  }

  pub fn is_edit_mode(&self) -> bool {
    self.state.is_edit_mode
  }

  /// Devuelve `true` si la contraseña coincide. Un fallo no cambia el estado.
  pub fn login(&mut self, password: &str) -> bool {
    if password != self.secret {
      debug!("login rejected");
      return false;
    }
    self.state.is_authenticated = true;
    info!("admin session started");
    true
  }

  pub fn logout(&mut self) {
    self.state = SessionState::default();
    info!("admin session ended");
  }

  /// Alterna el modo edición; sin sesión no hace nada.
  pub fn toggle_edit_mode(&mut self) {
    if !self.state.is_authenticated {
      return;
    }
    self.state.is_edit_mode = !self.state.is_edit_mode;
    debug!(edit_mode = self.state.is_edit_mode, "edit mode toggled");
  }
}
