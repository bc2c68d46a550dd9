mod content;
mod show;
mod theme;

use std::io::Write;

use anyhow::bail;
use bandsite_config::BandsitePaths;
use bandsite_core::ports::SlotStorage;
use bandsite_core::services::{LOGIN_FAILED_MESSAGE, SessionStore};

use crate::cli::Command;
use crate::config::SiteConfig;

/// Runs one command against the given storage, writing results to `out`.
pub fn execute<S, W>(
  command: Command,
  storage: &S,
  site: &SiteConfig,
  paths: &BandsitePaths,
  out: &mut W,
) -> anyhow::Result<()>
where
  S: SlotStorage,
  W: Write,
{
  match command {
    Command::Show { json, path } => show::run(storage, site, json, path.as_deref(), out),
    Command::Edit { password, path, value } => content::edit(storage, &password, &path, value, out),
    Command::Feature { password, index, none: _ } => content::feature(storage, &password, index, out),
    Command::Reset { password } => content::reset(storage, &password, out),
    Command::Theme { theme } => theme::run(storage, site, theme.as_deref(), out),
    Command::Export { file } => content::export(storage, &file, out),
    Command::Import { password, file } => content::import(storage, &password, &file, out),
    Command::Paths => {
      writeln!(out, "config: {}", paths.config_file().display())?;
      writeln!(out, "data:   {}", paths.data_dir.display())?;
      Ok(())
    }
  }
}

/// Opens an admin session or fails with the login message.
fn authenticate(password: &str) -> anyhow::Result<SessionStore> {
  let mut session = SessionStore::new();
  if !session.login(password) {
    bail!(LOGIN_FAILED_MESSAGE);
  }
  Ok(session)
}

#[cfg(test)]
mod tests {
  use super::*;
  use bandsite_core::domain::{ContentDocument, Theme};
  use bandsite_core::ports::{CONTENT_SLOT, MemoryStorage, THEME_SLOT};
  use bandsite_core::services::{ADMIN_PASSWORD, ContentStore};
  use tempfile::tempdir;

  fn run(storage: &MemoryStorage, command: Command) -> anyhow::Result<String> {
    let tmp = tempdir()?;
    let paths = BandsitePaths::rooted(tmp.path())?;
    let mut out = Vec::new();
    execute(command, storage, &SiteConfig::default(), &paths, &mut out)?;
    Ok(String::from_utf8(out)?)
  }

  fn edit(path: &str, value: &str) -> Command {
    Command::Edit { password: ADMIN_PASSWORD.into(), path: path.into(), value: value.into() }
  }

  #[test]
  fn test_edit_persists_field() {
    let storage = MemoryStorage::new();

    let printed = run(&storage, edit("location", "Reykjavik, Iceland")).unwrap();
    assert!(printed.contains("location = Reykjavik, Iceland"));

    let store = ContentStore::load(&storage);
    let expected = ContentDocument { location: "Reykjavik, Iceland".into(), ..ContentDocument::default() };
    assert_eq!(store.content(), &expected);
  }

  #[test]
  fn test_wrong_password_is_rejected_without_changes() {
    let storage = MemoryStorage::new();
    let command = Command::Edit { password: "let me in".into(), path: "genre".into(), value: "Pop".into() };

    let err = run(&storage, command).unwrap_err();
    assert_eq!(err.to_string(), LOGIN_FAILED_MESSAGE);
    assert!(storage.is_empty());
  }

  #[test]
  fn test_edit_rejects_unknown_or_missing_paths() {
    let storage = MemoryStorage::new();
    assert!(run(&storage, edit("albums.0.cover", "x")).is_err());
    assert!(run(&storage, edit("reviews.42", "x")).is_err());
    assert!(run(&storage, edit("tourDates.0.date", "soon")).is_err());
    assert!(storage.is_empty());
  }

  #[test]
  fn test_show_single_path_and_json() {
    let storage = MemoryStorage::new();

    let title = run(&storage, Command::Show { json: false, path: Some("heroTitle".into()) }).unwrap();
    assert_eq!(title.trim(), ContentDocument::default().hero_title);

    let json = run(&storage, Command::Show { json: true, path: None }).unwrap();
    let parsed: ContentDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, ContentDocument::default());

    let summary = run(&storage, Command::Show { json: false, path: None }).unwrap();
    assert!(summary.contains("Infection (2025) [featured] - 9 tracks"));
    assert!(summary.contains("2025-03-15  The Basement East, Nashville, TN"));
    assert!(!summary.contains("SOLD OUT"));
  }

  #[test]
  fn test_feature_and_reset() {
    let storage = MemoryStorage::new();

    run(&storage, Command::Feature { password: ADMIN_PASSWORD.into(), index: Some(1), none: false }).unwrap();
    let store = ContentStore::load(&storage);
    assert_eq!(store.content().featured_album().map(|a| a.title.as_str()), Some("Purity"));

    run(&storage, Command::Reset { password: ADMIN_PASSWORD.into() }).unwrap();
    assert_eq!(storage.get_item(CONTENT_SLOT).unwrap(), None);
  }

  #[test]
  fn test_theme_select_and_show() {
    let storage = MemoryStorage::new();

    let printed = run(&storage, Command::Theme { theme: None }).unwrap();
    assert!(printed.starts_with("theme: atmospheric"));

    run(&storage, Command::Theme { theme: Some("raw".into()) }).unwrap();
    assert_eq!(storage.get_item(THEME_SLOT).unwrap().as_deref(), Some(Theme::Raw.id()));

    assert!(run(&storage, Command::Theme { theme: Some("sepia".into()) }).is_err());
  }

  #[test]
  fn test_paths_lists_config_and_data_dirs() {
    let printed = run(&MemoryStorage::new(), Command::Paths).unwrap();
    assert!(printed.contains("bandsite.toml"));
    assert!(printed.contains("data:"));
  }

  #[test]
  fn test_export_then_import() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("content.json");

    let source = MemoryStorage::new();
    run(&source, edit("genre", "Slowcore")).unwrap();
    run(&source, Command::Export { file: file.clone() }).unwrap();

    let target = MemoryStorage::new();
    run(&target, Command::Import { password: ADMIN_PASSWORD.into(), file }).unwrap();
    assert_eq!(ContentStore::load(&target).content().genre, "Slowcore");
  }
}
