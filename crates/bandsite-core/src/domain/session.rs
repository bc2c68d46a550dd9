use serde::Serialize;

/// Banderas de sesión del panel de administración.
///
/// Invariante: `is_edit_mode` solo puede ser `true` si `is_authenticated`
/// también lo es. Nunca se persiste: cada arranque empieza sin sesión.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
  pub is_authenticated: bool,
  pub is_edit_mode: bool,
}

/// Estados posibles de la máquina de sesión.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionPhase {
  Unauthenticated,
  /// Autenticado, viendo la página sin edición en línea.
  Viewing,
  /// Autenticado y con la edición en línea activa.
  Editing,
}

impl SessionState {
  pub fn phase(&self) -> SessionPhase {
    match (self.is_authenticated, self.is_edit_mode) {
      (false, _) => SessionPhase::Unauthenticated,
      (true, false) => SessionPhase::Viewing,
      (true, true) => SessionPhase::Editing,
    }
  }
}
