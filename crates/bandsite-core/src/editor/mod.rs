pub mod bound_field;
pub mod editable_field;

pub use bound_field::BoundField;
pub use editable_field::{
  DEFAULT_PLACEHOLDER, EditableField, FieldEvent, FieldMode, FieldOutcome, FieldView, Key, KeyPress,
};
