use crate::domain::FieldPath;
use crate::editor::editable_field::{EditableField, FieldEvent, FieldMode, FieldOutcome, FieldView};
use crate::errors::ContentError;
use crate::ports::SlotStorage;
use crate::services::{ContentStore, SessionStore};

/// Campo editable conectado a una ruta del documento.
///
/// Lee el valor del `ContentStore` en cada llamada y, al confirmar, escribe
/// el borrador con `ContentStore::write_path`. El modo edición lo decide el
/// `SessionStore`.
#[derive(Debug, Clone)]
pub struct BoundField {
  path: FieldPath,
  field: EditableField,
}

impl BoundField {
  pub fn new(path: FieldPath) -> Self {
    let mode = if path.is_multiline() { FieldMode::MultiLine } else { FieldMode::SingleLine };
    Self { path, field: EditableField::new(mode) }
  }

  pub fn path(&self) -> FieldPath {
    self.path
  }

  pub fn field(&self) -> &EditableField {
    &self.field
  }

  pub fn view<S: SlotStorage>(&self, store: &ContentStore<S>, session: &SessionStore) -> FieldView {
    let value = store.read_path(&self.path).unwrap_or_default();
    self.field.view(&value, session.is_edit_mode())
  }

  /// Procesa un evento; si confirma, el valor se escribe en el store.
  ///
  /// Un error de escritura se devuelve tal cual: el campo ya ha salido de
  /// edición y el store conserva el valor anterior.
  pub fn handle<S: SlotStorage>(
    &mut self,
    event: FieldEvent,
    store: &mut ContentStore<S>,
    session: &SessionStore,
  ) -> Result<FieldOutcome, ContentError> {
    let path = self.path;
    let value = store.read_path(&path).unwrap_or_default();

    let mut written = Ok(());
    let outcome = self.field.handle(event, &value, session.is_edit_mode(), |draft| {
      written = store.write_path(&path, draft);
    });
    written?;

    Ok(outcome)
  }
}
