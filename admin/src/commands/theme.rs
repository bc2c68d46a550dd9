use std::io::Write;

use bandsite_core::domain::Theme;
use bandsite_core::ports::SlotStorage;
use bandsite_core::services::ThemeStore;

use crate::config::SiteConfig;

pub fn run<S, W>(storage: &S, site: &SiteConfig, selection: Option<&str>, out: &mut W) -> anyhow::Result<()>
where
  S: SlotStorage,
  W: Write,
{
  let mut store = ThemeStore::load_with_default(storage, site.default_theme);

  if let Some(id) = selection {
    let theme: Theme = id.parse().map_err(anyhow::Error::msg)?;
    store.select(theme)?;
  }

  let palette = store.palette();
  writeln!(out, "theme: {}", store.theme())?;
  writeln!(out, "  background {}", palette.background)?;
  writeln!(out, "  text       {}", palette.text)?;
  writeln!(out, "  accent     {}", palette.accent)?;
  writeln!(out, "  secondary  {}", palette.secondary)?;
  writeln!(out, "  border     {}", palette.border)?;
  writeln!(out, "  hover      {}", palette.hover)?;
  Ok(())
}
