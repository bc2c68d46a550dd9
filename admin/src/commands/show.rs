use std::io::Write;

use anyhow::anyhow;
use bandsite_core::domain::FieldPath;
use bandsite_core::ports::SlotStorage;
use bandsite_core::services::{ContentStore, ThemeStore};

use crate::config::SiteConfig;

pub fn run<S, W>(storage: &S, site: &SiteConfig, json: bool, path: Option<&str>, out: &mut W) -> anyhow::Result<()>
where
  S: SlotStorage,
  W: Write,
{
  let store = ContentStore::load(storage);

  if let Some(path) = path {
    let path: FieldPath = path.parse()?;
    let value = store.read_path(&path).ok_or_else(|| anyhow!("no field at `{path}`"))?;
    writeln!(out, "{value}")?;
    return Ok(());
  }

  if json {
    writeln!(out, "{}", store.snapshot_json()?)?;
    return Ok(());
  }

  let doc = store.content();
  let theme = ThemeStore::load_with_default(storage, site.default_theme).theme();

  writeln!(out, "{}  [{theme}]", doc.hero_title)?;
  writeln!(out, "{}", doc.hero_tagline)?;
  writeln!(out, "  > {} | {}", doc.hero_cta_primary, doc.hero_cta_secondary)?;

  writeln!(out, "\n== About ==")?;
  writeln!(out, "{} / formed {} / {}", doc.location, doc.formed, doc.genre)?;
  for paragraph in doc.bio_paragraphs() {
    writeln!(out, "  {paragraph}")?;
  }
  for (i, member) in doc.band_members.iter().enumerate() {
    writeln!(out, "  {i}. {} ({})", member.name, member.role)?;
  }

  writeln!(out, "\n== Music ==")?;
  let featured = doc.albums.iter().position(|a| a.featured);
  for (i, album) in doc.albums.iter().enumerate() {
    let mark = if Some(i) == featured { " [featured]" } else { "" };
    writeln!(out, "  {i}. {} ({}){mark} - {} tracks", album.title, album.year, album.tracks.len())?;
  }
  writeln!(out, "  {}: {}", doc.primary_platform, doc.primary_platform_url)?;

  writeln!(out, "\n== Tour ==")?;
  for date in doc.tour_dates_by_date() {
    let status = if date.is_sold_out() { "  SOLD OUT" } else { "" };
    writeln!(out, "  {}  {}, {}{status}", date.date, date.venue, date.city)?;
  }

  writeln!(out, "\n== Contact ==")?;
  writeln!(out, "  {}", doc.email)?;
  for link in &doc.social_links {
    writeln!(out, "  {}: {} ({})", link.platform, link.handle, link.url)?;
  }

  writeln!(out, "\n== Reviews ==")?;
  for review in &doc.reviews {
    writeln!(out, "  {review}")?;
  }

  Ok(())
}
