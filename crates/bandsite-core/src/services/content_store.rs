use tracing::{debug, info, warn};

use crate::domain::validation::{self, parse_iso_date, ValidationError};
use crate::domain::{
  Album, AlbumPart, BandMember, ContentDocument, FieldPath, FieldUpdate, MemberPart, SocialLink, SocialLinkPart,
  TextField, TourDate, TourDatePart,
};
use crate::errors::ContentError;
use crate::ports::{CONTENT_SLOT, SlotStorage};
use crate::services::snapshot;

/// Store del documento de contenido.
///
/// Mantiene el documento en memoria y lo vuelve a escribir entero en su slot
/// después de cada cambio. Las mutaciones se calculan sobre una copia: si la
/// validación o la escritura fallan, el documento en memoria no cambia.
pub struct ContentStore<S: SlotStorage> {
  storage: S,
  slot: String,
  content: ContentDocument,
}

impl<S: SlotStorage> ContentStore<S> {
  /// Carga el store desde el slot por defecto.
  pub fn load(storage: S) -> Self {
    Self::load_from_slot(storage, CONTENT_SLOT)
  }

  /// Carga el store desde un slot concreto.
  ///
  /// Nunca falla: un snapshot ilegible o un backend que no responde se
  /// registran y se arranca con el contenido por defecto.
  pub fn load_from_slot(storage: S, slot: &str) -> Self {
    let content = match storage.get_item(slot) {
      Ok(Some(raw)) => snapshot::restore(&raw).unwrap_or_else(|e| {
        warn!(slot, error = %e, "stored content is not valid JSON, using defaults");
        ContentDocument::default()
      }),
      Ok(None) => ContentDocument::default(),
      Err(e) => {
        warn!(slot, error = %e, "could not read stored content, using defaults");
        ContentDocument::default()
      }
    };

    Self { storage, slot: slot.to_string(), content }
  }

  pub fn content(&self) -> &ContentDocument {
    &self.content
  }

  // -------- full-field updates --------

  /// Reemplaza un campo de primer nivel completo.
  pub fn update_field(&mut self, update: FieldUpdate) -> Result<(), ContentError> {
    let key = update.key();
    self.mutate(|doc| {
      match update {
        FieldUpdate::Text(field, value) => {
          validation::validate_text(field, &value)?;
          *field.get_mut(doc) = value;
        }
        FieldUpdate::BandMembers(members) => {
          validation::validate_members(&members)?;
          doc.band_members = members;
        }
        FieldUpdate::Albums(albums) => {
          validation::validate_albums(&albums)?;
          doc.albums = albums;
        }
        FieldUpdate::TourDates(dates) => {
          validation::validate_tour_dates(&dates)?;
          doc.tour_dates = dates;
        }
        FieldUpdate::SocialLinks(links) => doc.social_links = links,
        FieldUpdate::Reviews(reviews) => doc.reviews = reviews,
      }
      Ok(())
    })?;

    debug!(field = key, "content field updated");
    Ok(())
  }

  pub fn set_text(&mut self, field: TextField, value: impl Into<String>) -> Result<(), ContentError> {
    self.update_field(FieldUpdate::Text(field, value.into()))
  }

  // -------- members --------

  pub fn replace_member(&mut self, index: usize, member: BandMember) -> Result<(), ContentError> {
    self.mutate(|doc| {
      *element_mut(&mut doc.band_members, "bandMembers", index)? = member;
      validation::validate_members(&doc.band_members).map_err(Into::into)
    })
  }

  pub fn add_member(&mut self, member: BandMember) -> Result<(), ContentError> {
    self.mutate(|doc| {
      doc.band_members.push(member);
      validation::validate_members(&doc.band_members).map_err(Into::into)
    })
  }

  pub fn remove_member(&mut self, index: usize) -> Result<BandMember, ContentError> {
    self.remove_from(index, "bandMembers", |doc| &mut doc.band_members)
  }

  // -------- albums --------

  pub fn replace_album(&mut self, index: usize, album: Album) -> Result<(), ContentError> {
    self.mutate(|doc| {
      *element_mut(&mut doc.albums, "albums", index)? = album;
      validation::validate_albums(&doc.albums).map_err(Into::into)
    })
  }

  pub fn add_album(&mut self, album: Album) -> Result<(), ContentError> {
    self.mutate(|doc| {
      doc.albums.push(album);
      validation::validate_albums(&doc.albums).map_err(Into::into)
    })
  }

  pub fn remove_album(&mut self, index: usize) -> Result<Album, ContentError> {
    self.remove_from(index, "albums", |doc| &mut doc.albums)
  }

  /// Marca un álbum como destacado y desmarca el resto; `None` los desmarca todos.
  pub fn set_featured_album(&mut self, index: Option<usize>) -> Result<(), ContentError> {
    self.mutate(|doc| {
      if let Some(index) = index {
        element_mut(&mut doc.albums, "albums", index)?;
      }
      for (i, album) in doc.albums.iter_mut().enumerate() {
        album.featured = Some(i) == index;
      }
      Ok(())
    })
  }

  // -------- tour dates --------

  pub fn replace_tour_date(&mut self, index: usize, date: TourDate) -> Result<(), ContentError> {
    validation::validate_tour_date(&date)?;
    self.mutate(|doc| {
      *element_mut(&mut doc.tour_dates, "tourDates", index)? = date;
      Ok(())
    })
  }

  pub fn add_tour_date(&mut self, date: TourDate) -> Result<(), ContentError> {
    validation::validate_tour_date(&date)?;
    self.mutate(|doc| {
      doc.tour_dates.push(date);
      Ok(())
    })
  }

  pub fn remove_tour_date(&mut self, index: usize) -> Result<TourDate, ContentError> {
    self.remove_from(index, "tourDates", |doc| &mut doc.tour_dates)
  }

  // -------- social links --------

  pub fn replace_social_link(&mut self, index: usize, link: SocialLink) -> Result<(), ContentError> {
    self.mutate(|doc| {
      *element_mut(&mut doc.social_links, "socialLinks", index)? = link;
      Ok(())
    })
  }

  pub fn add_social_link(&mut self, link: SocialLink) -> Result<(), ContentError> {
    self.mutate(|doc| {
      doc.social_links.push(link);
      Ok(())
    })
  }

  pub fn remove_social_link(&mut self, index: usize) -> Result<SocialLink, ContentError> {
    self.remove_from(index, "socialLinks", |doc| &mut doc.social_links)
  }

  // -------- reviews --------

  pub fn replace_review(&mut self, index: usize, quote: impl Into<String>) -> Result<(), ContentError> {
    let quote = quote.into();
    self.mutate(|doc| {
      *element_mut(&mut doc.reviews, "reviews", index)? = quote;
      Ok(())
    })
  }

  pub fn add_review(&mut self, quote: impl Into<String>) -> Result<(), ContentError> {
    let quote = quote.into();
    self.mutate(|doc| {
      doc.reviews.push(quote);
      Ok(())
    })
  }

  pub fn remove_review(&mut self, index: usize) -> Result<String, ContentError> {
    self.remove_from(index, "reviews", |doc| &mut doc.reviews)
  }

  // -------- key paths --------

  /// Texto actual en la ruta indicada; `None` si el índice no existe.
  pub fn read_path(&self, path: &FieldPath) -> Option<String> {
    let doc = &self.content;
    let text = match *path {
      FieldPath::Text(field) => field.get(doc).to_string(),
      FieldPath::Member { index, part } => {
        let member = doc.band_members.get(index)?;
        match part {
          MemberPart::Name => member.name.clone(),
          MemberPart::Role => member.role.clone(),
          MemberPart::Bio => member.bio.clone(),
        }
      }
      FieldPath::Album { index, part } => {
        let album = doc.albums.get(index)?;
        match part {
          AlbumPart::Title => album.title.clone(),
          AlbumPart::Year => album.year.to_string(),
          AlbumPart::Description => album.description.clone(),
          AlbumPart::Track(track) => album.tracks.get(track)?.clone(),
        }
      }
      FieldPath::TourDate { index, part } => {
        let date = doc.tour_dates.get(index)?;
        match part {
          TourDatePart::Date => date.date.clone(),
          TourDatePart::Venue => date.venue.clone(),
          TourDatePart::City => date.city.clone(),
          TourDatePart::TicketLink => date.ticket_link.clone().unwrap_or_default(),
        }
      }
      FieldPath::SocialLink { index, part } => {
        let link = doc.social_links.get(index)?;
        match part {
          SocialLinkPart::Platform => link.platform.clone(),
          SocialLinkPart::Url => link.url.clone(),
          SocialLinkPart::Handle => link.handle.clone(),
        }
      }
      FieldPath::Review(index) => doc.reviews.get(index)?.clone(),
    };
    Some(text)
  }

  /// Escribe un texto en la ruta indicada, validando el invariante afectado.
  pub fn write_path(&mut self, path: &FieldPath, value: impl Into<String>) -> Result<(), ContentError> {
    let value = value.into();
    self.mutate(|doc| apply_path(doc, path, value))?;
    debug!(path = %path, "content path updated");
    Ok(())
  }

  // -------- lifecycle --------

  /// Vuelve al contenido por defecto y borra el snapshot guardado.
  pub fn reset(&mut self) -> Result<(), ContentError> {
    self.storage.remove_item(&self.slot)?;
    self.content = ContentDocument::default();
    info!(slot = %self.slot, "content reset to defaults");
    Ok(())
  }

  /// Documento actual como JSON legible.
  pub fn snapshot_json(&self) -> Result<String, ContentError> {
    Ok(serde_json::to_string_pretty(&self.content)?)
  }

  /// Sustituye el documento por un snapshot externo (mismas reglas que la carga).
  pub fn import_json(&mut self, raw: &str) -> Result<(), ContentError> {
    let next = snapshot::restore(raw)?;
    self.commit(next)?;
    info!(slot = %self.slot, "content imported from snapshot");
    Ok(())
  }

  fn remove_from<T, F>(&mut self, index: usize, collection: &'static str, items: F) -> Result<T, ContentError>
  where
    F: FnOnce(&mut ContentDocument) -> &mut Vec<T>,
  {
    let mut next = self.content.clone();
    let list = items(&mut next);
    if index >= list.len() {
      return Err(ContentError::IndexOutOfRange { collection, index, len: list.len() });
    }
    let removed = list.remove(index);
    self.commit(next)?;
    Ok(removed)
  }

  fn mutate<F>(&mut self, apply: F) -> Result<(), ContentError>
  where
    F: FnOnce(&mut ContentDocument) -> Result<(), ContentError>,
  {
    let mut next = self.content.clone();
    apply(&mut next)?;
    self.commit(next)
  }

  fn commit(&mut self, next: ContentDocument) -> Result<(), ContentError> {
    let raw = serde_json::to_string(&next)?;
    self.storage.set_item(&self.slot, &raw)?;
    self.content = next;
    Ok(())
  }
}

fn element_mut<'a, T>(items: &'a mut [T], collection: &'static str, index: usize) -> Result<&'a mut T, ContentError> {
  let len = items.len();
  items.get_mut(index).ok_or(ContentError::IndexOutOfRange { collection, index, len })
}

fn apply_path(doc: &mut ContentDocument, path: &FieldPath, value: String) -> Result<(), ContentError> {
  match *path {
    FieldPath::Text(field) => {
      validation::validate_text(field, &value)?;
      *field.get_mut(doc) = value;
    }
    FieldPath::Member { index, part } => {
      let member = element_mut(&mut doc.band_members, "bandMembers", index)?;
      match part {
        MemberPart::Name => member.name = value,
        MemberPart::Role => member.role = value,
        MemberPart::Bio => member.bio = value,
      }
      validation::validate_members(&doc.band_members)?;
    }
    FieldPath::Album { index, part } => {
      let album = element_mut(&mut doc.albums, "albums", index)?;
      match part {
        AlbumPart::Title => album.title = value,
        AlbumPart::Year => {
          album.year = value.trim().parse().map_err(|_| ValidationError::InvalidYear(value.clone()))?;
        }
        AlbumPart::Description => album.description = value,
        AlbumPart::Track(track) => *element_mut(&mut album.tracks, "tracks", track)? = value,
      }
    }
    FieldPath::TourDate { index, part } => {
      let date = element_mut(&mut doc.tour_dates, "tourDates", index)?;
      match part {
        TourDatePart::Date => {
          parse_iso_date(&value)?;
          date.date = value.trim().to_string();
        }
        TourDatePart::Venue => date.venue = value,
        TourDatePart::City => date.city = value,
        TourDatePart::TicketLink => {
          let link = value.trim();
          date.ticket_link = (!link.is_empty()).then(|| link.to_string());
        }
      }
    }
    FieldPath::SocialLink { index, part } => {
      let link = element_mut(&mut doc.social_links, "socialLinks", index)?;
      match part {
        SocialLinkPart::Platform => link.platform = value,
        SocialLinkPart::Url => link.url = value,
        SocialLinkPart::Handle => link.handle = value,
      }
    }
    FieldPath::Review(index) => *element_mut(&mut doc.reviews, "reviews", index)? = value,
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ports::{MemoryStorage, StorageError};
  use pretty_assertions::assert_eq;
  use std::cell::Cell;

  /// Backend que falla al escribir cuando se le pide.
  #[derive(Default)]
  struct FlakyStorage {
    inner: MemoryStorage,
    fail_writes: Cell<bool>,
  }

  impl SlotStorage for FlakyStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
      self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
      if self.fail_writes.get() {
        return Err(StorageError::Unavailable("quota exceeded".into()));
      }
      self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
      self.inner.remove_item(key)
    }
  }

  fn stored(storage: &MemoryStorage) -> Option<ContentDocument> {
    storage.get_item(CONTENT_SLOT).unwrap().map(|raw| serde_json::from_str(&raw).unwrap())
  }

  #[test]
  fn test_starts_with_defaults_when_slot_is_empty() {
    let storage = MemoryStorage::new();
    let store = ContentStore::load(&storage);

    assert_eq!(store.content(), &ContentDocument::default());
    assert!(storage.is_empty());
  }

  #[test]
  fn test_update_persists_and_survives_reload() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage);
    store.set_text(TextField::Location, "Reykjavik, Iceland").unwrap();

    let reloaded = ContentStore::load(&storage);
    let expected = ContentDocument { location: "Reykjavik, Iceland".into(), ..ContentDocument::default() };
    assert_eq!(reloaded.content(), &expected);
  }

  #[test]
  fn test_update_field_only_touches_that_field() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage);
    let reviews = vec!["\"One.\"".to_string(), "\"Two.\"".to_string()];

    store.update_field(FieldUpdate::Reviews(reviews.clone())).unwrap();

    let expected = ContentDocument { reviews, ..ContentDocument::default() };
    assert_eq!(store.content(), &expected);
    assert_eq!(stored(&storage).as_ref(), Some(&expected));
  }

  #[test]
  fn test_invalid_json_in_slot_falls_back_to_defaults() {
    let storage = MemoryStorage::with_item(CONTENT_SLOT, "{not valid json");
    let mut store = ContentStore::load(&storage);
    assert_eq!(store.content(), &ContentDocument::default());

    // La siguiente escritura sobrescribe el snapshot roto.
    store.set_text(TextField::Genre, "Doom").unwrap();
    assert_eq!(stored(&storage).map(|d| d.genre), Some("Doom".to_string()));
  }

  #[test]
  fn test_reset_restores_defaults_and_clears_slot() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage);
    store.set_text(TextField::HeroTitle, "New Name").unwrap();
    store.remove_review(0).unwrap();

    store.reset().unwrap();

    assert_eq!(store.content(), &ContentDocument::default());
    assert_eq!(storage.get_item(CONTENT_SLOT).unwrap(), None);
    assert_eq!(ContentStore::load(&storage).content(), &ContentDocument::default());
  }

  #[test]
  fn test_invalid_updates_leave_state_untouched() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage);

    let err = store.set_text(TextField::HeroTitle, "  ").unwrap_err();
    assert!(matches!(err, ContentError::Invalid(ValidationError::EmptyText(TextField::HeroTitle))));

    let mut members = store.content().band_members.clone();
    members[1].name = members[0].name.clone();
    assert!(store.update_field(FieldUpdate::BandMembers(members)).is_err());

    let mut albums = store.content().albums.clone();
    albums.iter_mut().for_each(|a| a.featured = true);
    assert!(matches!(
      store.update_field(FieldUpdate::Albums(albums)),
      Err(ContentError::Invalid(ValidationError::MultipleFeatured(3)))
    ));

    assert_eq!(store.content(), &ContentDocument::default());
    assert!(storage.is_empty());
  }

  #[test]
  fn test_failed_write_keeps_previous_document() {
    let storage = FlakyStorage::default();
    let mut store = ContentStore::load(&storage);
    store.set_text(TextField::Formed, "2015").unwrap();

    storage.fail_writes.set(true);
    let err = store.set_text(TextField::Formed, "1999").unwrap_err();

    assert!(matches!(err, ContentError::Storage(_)));
    assert_eq!(store.content().formed, "2015");
  }

  #[test]
  fn test_featured_album_is_exclusive() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage);

    store.set_featured_album(Some(2)).unwrap();
    let flags: Vec<_> = store.content().albums.iter().map(|a| a.featured).collect();
    assert_eq!(flags, vec![false, false, true]);
    assert_eq!(store.content().featured_album().map(|a| a.title.as_str()), Some("Hellscape Vol I (The Voices)"));

    store.set_featured_album(None).unwrap();
    assert!(store.content().featured_album().is_none());

    assert!(matches!(
      store.set_featured_album(Some(9)),
      Err(ContentError::IndexOutOfRange { collection: "albums", index: 9, len: 3 })
    ));
  }

  #[test]
  fn test_replacing_album_cannot_add_second_featured() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage);
    let mut album = store.content().albums[1].clone();
    album.featured = true;

    assert!(store.replace_album(1, album.clone()).is_err());

    store.set_featured_album(None).unwrap();
    store.replace_album(1, album).unwrap();
    assert_eq!(store.content().featured_album().map(|a| a.title.as_str()), Some("Purity"));
  }

  #[test]
  fn test_element_operations() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage);
    let defaults = ContentDocument::default();

    let date = TourDate {
      date: "2027-01-09".into(),
      venue: "Tavastia".into(),
      city: "Helsinki, FI".into(),
      ticket_link: None,
      sold_out: Some(false),
    };
    store.add_tour_date(date.clone()).unwrap();
    assert_eq!(store.content().tour_dates.last(), Some(&date));

    let bad = TourDate { date: "09/01/2027".into(), ..date.clone() };
    assert!(store.replace_tour_date(0, bad).is_err());

    let removed = store.remove_tour_date(0).unwrap();
    assert_eq!(removed, defaults.tour_dates[0]);
    assert_eq!(store.content().tour_dates.len(), defaults.tour_dates.len());

    let member = BandMember { name: "Kai Berg".into(), role: "Trumpet".into(), bio: String::new() };
    store.add_member(member.clone()).unwrap();
    assert!(store.add_member(member).is_err());

    let link = SocialLink { platform: "TikTok".into(), url: "https://tiktok.com/@lenaxmetal".into(), handle: "@lenaxmetal".into() };
    store.replace_social_link(0, link.clone()).unwrap();
    assert_eq!(store.content().social_links[0], link);

    store.add_review("\"Huge.\"").unwrap();
    store.replace_review(0, "\"Edited.\"").unwrap();
    assert_eq!(store.content().reviews.first().map(String::as_str), Some("\"Edited.\""));

    assert!(matches!(
      store.remove_social_link(10),
      Err(ContentError::IndexOutOfRange { collection: "socialLinks", .. })
    ));
    assert_eq!(stored(&storage).as_ref(), Some(store.content()));
  }

  #[test]
  fn test_read_and_write_paths() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage);

    let track: FieldPath = "albums.0.tracks.1".parse().unwrap();
    assert_eq!(store.read_path(&track).as_deref(), Some("Leeches"));
    store.write_path(&track, "Leeches (Live)").unwrap();
    assert_eq!(store.content().albums[0].tracks[1], "Leeches (Live)");

    let year: FieldPath = "albums.1.year".parse().unwrap();
    store.write_path(&year, " 2022 ").unwrap();
    assert_eq!(store.content().albums[1].year, 2022);
    assert!(store.write_path(&year, "twenty").is_err());

    let link: FieldPath = "tourDates.1.ticketLink".parse().unwrap();
    assert_eq!(store.read_path(&link).as_deref(), Some("https://example.com/tickets"));
    store.write_path(&link, "   ").unwrap();
    assert_eq!(store.content().tour_dates[1].ticket_link, None);
    assert_eq!(store.read_path(&link).as_deref(), Some(""));
    store.write_path(&link, "https://tickets.example.com/underground").unwrap();
    assert_eq!(store.content().tour_dates[1].ticket_link.as_deref(), Some("https://tickets.example.com/underground"));

    let name: FieldPath = "bandMembers.1.name".parse().unwrap();
    assert!(store.write_path(&name, "Venomous").is_err());

    assert_eq!(store.read_path(&FieldPath::Review(99)), None);
    assert!(store.write_path(&FieldPath::Review(99), "x").is_err());
  }

  #[test]
  fn test_import_applies_merge_rules_and_persists() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage);

    store.import_json(r#"{"email": "booking@example.com", "albums": 42}"#).unwrap();
    assert_eq!(store.content().email, "booking@example.com");
    assert_eq!(store.content().albums, ContentDocument::default().albums);
    assert_eq!(stored(&storage).as_ref(), Some(store.content()));

    assert!(store.import_json("nope").is_err());

    let exported = store.snapshot_json().unwrap();
    let again = ContentStore::load(MemoryStorage::with_item(CONTENT_SLOT, &exported));
    assert_eq!(again.content(), store.content());
  }
}
