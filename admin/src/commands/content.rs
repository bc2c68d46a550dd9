use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, anyhow};
use bandsite_config::atomic_write_str;
use bandsite_core::domain::FieldPath;
use bandsite_core::editor::{BoundField, FieldEvent, FieldOutcome};
use bandsite_core::ports::SlotStorage;
use bandsite_core::services::ContentStore;

use super::authenticate;

/// Same path the page takes: log in, enter edit mode, click the field,
/// type the new text and let it lose focus.
pub fn edit<S, W>(storage: &S, password: &str, path: &str, value: String, out: &mut W) -> anyhow::Result<()>
where
  S: SlotStorage,
  W: Write,
{
  let mut session = authenticate(password)?;
  session.toggle_edit_mode();

  let path: FieldPath = path.parse()?;
  let mut store = ContentStore::load(storage);
  if store.read_path(&path).is_none() {
    return Err(anyhow!("no field at `{path}`"));
  }

  let mut field = BoundField::new(path);
  field.handle(FieldEvent::Click, &mut store, &session)?;
  field.handle(FieldEvent::Input(value), &mut store, &session)?;
  let outcome = field.handle(FieldEvent::Blur, &mut store, &session)?;
  session.logout();

  if outcome != FieldOutcome::Committed {
    return Err(anyhow!("edit of `{path}` was not committed"));
  }

  writeln!(out, "{path} = {}", store.read_path(&path).unwrap_or_default())?;
  Ok(())
}

pub fn feature<S, W>(storage: &S, password: &str, index: Option<usize>, out: &mut W) -> anyhow::Result<()>
where
  S: SlotStorage,
  W: Write,
{
  authenticate(password)?;
  let mut store = ContentStore::load(storage);
  store.set_featured_album(index)?;

  match store.content().featured_album() {
    Some(album) => writeln!(out, "featured: {}", album.title)?,
    None => writeln!(out, "featured: none")?,
  }
  Ok(())
}

pub fn reset<S, W>(storage: &S, password: &str, out: &mut W) -> anyhow::Result<()>
where
  S: SlotStorage,
  W: Write,
{
  authenticate(password)?;
  ContentStore::load(storage).reset()?;
  writeln!(out, "content restored to defaults")?;
  Ok(())
}

pub fn export<S, W>(storage: &S, file: &Path, out: &mut W) -> anyhow::Result<()>
where
  S: SlotStorage,
  W: Write,
{
  let json = ContentStore::load(storage).snapshot_json()?;
  atomic_write_str(file, &json).with_context(|| format!("writing {}", file.display()))?;
  writeln!(out, "exported to {}", file.display())?;
  Ok(())
}

pub fn import<S, W>(storage: &S, password: &str, file: &Path, out: &mut W) -> anyhow::Result<()>
where
  S: SlotStorage,
  W: Write,
{
  authenticate(password)?;
  let raw = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
  ContentStore::load(storage).import_json(&raw)?;
  writeln!(out, "imported {}", file.display())?;
  Ok(())
}
