/// Texto por defecto cuando el valor está vacío.
pub const DEFAULT_PLACEHOLDER: &str = "Click to edit...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
  /// Enter confirma; el borrador no admite saltos de línea.
  SingleLine,
  /// Enter inserta un salto de línea; Ctrl+Enter confirma.
  MultiLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
  Enter,
  Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
  pub key: Key,
  pub ctrl: bool,
}

impl KeyPress {
  pub fn plain(key: Key) -> Self {
    Self { key, ctrl: false }
  }

  pub fn ctrl(key: Key) -> Self {
    Self { key, ctrl: true }
  }
}

/// Interacciones que recibe un campo editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
  Click,
  /// Nuevo contenido completo del borrador.
  Input(String),
  Key(KeyPress),
  /// El campo pierde el foco.
  Blur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
  Ignored,
  StartedEditing,
  DraftChanged,
  Committed,
  Cancelled,
}

/// Lo que la vista debe pintar para el campo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
  pub text: String,
  pub is_placeholder: bool,
  /// El campo reacciona a un click para entrar en edición.
  pub clickable: bool,
  /// Borrador en curso, solo mientras se edita.
  pub draft: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldState {
  Idle,
  Editing { draft: String },
}

/// Campo de texto editable en línea.
///
/// No guarda el valor confirmado: lo recibe en cada llamada desde el store,
/// así lo que se muestra siempre coincide con el contenido. Lo único propio
/// es el borrador, que vive mientras dura una edición.
#[derive(Debug, Clone)]
pub struct EditableField {
  mode: FieldMode,
  placeholder: String,
  state: FieldState,
}

impl EditableField {
  pub fn new(mode: FieldMode) -> Self {
    Self { mode, placeholder: DEFAULT_PLACEHOLDER.to_string(), state: FieldState::Idle }
  }

  pub fn single_line() -> Self {
    Self::new(FieldMode::SingleLine)
  }

  pub fn multi_line() -> Self {
    Self::new(FieldMode::MultiLine)
  }

  pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
    self.placeholder = placeholder.into();
    self
  }

  pub fn mode(&self) -> FieldMode {
    self.mode
  }

  pub fn is_editing(&self) -> bool {
    matches!(self.state, FieldState::Editing { .. })
  }

  pub fn draft(&self) -> Option<&str> {
    match &self.state {
      FieldState::Editing { draft } => Some(draft),
      FieldState::Idle => None,
    }
  }

  pub fn view(&self, value: &str, edit_mode: bool) -> FieldView {
    let (text, is_placeholder) =
      if value.is_empty() { (self.placeholder.clone(), true) } else { (value.to_string(), false) };

    let draft = if edit_mode { self.draft().map(str::to_string) } else { None };
    let clickable = edit_mode && draft.is_none();

    FieldView { text, is_placeholder, clickable, draft }
  }

  /// Descarta el borrador si el modo edición se ha desactivado.
  pub fn sync_edit_mode(&mut self, edit_mode: bool) {
    if !edit_mode {
      self.state = FieldState::Idle;
    }
  }

  /// Procesa un evento. `on_commit` se invoca como mucho una vez, solo al
  /// confirmar, con el contenido del borrador.
  pub fn handle<F>(&mut self, event: FieldEvent, value: &str, edit_mode: bool, on_commit: F) -> FieldOutcome
  where
    F: FnOnce(String),
  {
    if !edit_mode {
      self.sync_edit_mode(false);
      return FieldOutcome::Ignored;
    }

    if !self.is_editing() {
      if event == FieldEvent::Click {
        self.state = FieldState::Editing { draft: value.to_string() };
        return FieldOutcome::StartedEditing;
      }
      return FieldOutcome::Ignored;
    }

    let FieldState::Editing { draft } = &mut self.state else {
      return FieldOutcome::Ignored;
    };

    match event {
      FieldEvent::Click => FieldOutcome::Ignored,
      FieldEvent::Input(text) => {
        *draft = match self.mode {
          FieldMode::SingleLine => text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect(),
          FieldMode::MultiLine => text,
        };
        FieldOutcome::DraftChanged
      }
      FieldEvent::Key(KeyPress { key: Key::Escape, .. }) => {
        self.state = FieldState::Idle;
        FieldOutcome::Cancelled
      }
      FieldEvent::Key(KeyPress { key: Key::Enter, ctrl }) => match self.mode {
        FieldMode::MultiLine if !ctrl => {
          draft.push('\n');
          FieldOutcome::DraftChanged
        }
        _ => self.commit(on_commit),
      },
      FieldEvent::Blur => self.commit(on_commit),
    }
  }

  fn commit<F: FnOnce(String)>(&mut self, on_commit: F) -> FieldOutcome {
    match std::mem::replace(&mut self.state, FieldState::Idle) {
      FieldState::Editing { draft } => {
        on_commit(draft);
        FieldOutcome::Committed
      }
      FieldState::Idle => FieldOutcome::Ignored,
    }
  }
}
