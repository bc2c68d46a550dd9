//! Lectura de snapshots persistidos.
//!
//! El snapshot se aplica campo a campo sobre el documento por defecto: lo que
//! falta, no decodifica o rompe un invariante se queda con el valor por
//! defecto, y el resto del snapshot se aprovecha igualmente.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::validation::{self, ValidationError};
use crate::domain::{Album, ContentDocument, TextField};

/// Reconstruye un documento a partir del JSON guardado.
///
/// Solo falla si el texto no es un objeto JSON; los campos individuales
/// defectuosos nunca hacen fallar la carga.
pub fn restore(raw: &str) -> Result<ContentDocument, serde_json::Error> {
  let value: Value = serde_json::from_str(raw)?;
  let Value::Object(map) = value else {
    return Err(serde_json::Error::custom("stored content is not a JSON object"));
  };
  Ok(merge_over_defaults(map))
}

pub fn merge_over_defaults(mut map: Map<String, Value>) -> ContentDocument {
  let mut doc = ContentDocument::default();

  for field in TextField::ALL {
    let slot = field.get_mut(&mut doc);
    let fallback = std::mem::take(slot);
    *slot = take_field(&mut map, field.key(), fallback, |v: &String| validation::validate_text(field, v));
  }

  doc.band_members =
    take_field(&mut map, "bandMembers", std::mem::take(&mut doc.band_members), |m| validation::validate_members(m));
  doc.albums = take_field(&mut map, "albums", std::mem::take(&mut doc.albums), |_: &Vec<Album>| Ok(()));
  normalize_featured(&mut doc.albums);
  doc.tour_dates =
    take_field(&mut map, "tourDates", std::mem::take(&mut doc.tour_dates), |d| validation::validate_tour_dates(d));
  doc.social_links = take_field(&mut map, "socialLinks", std::mem::take(&mut doc.social_links), |_| Ok(()));
  doc.reviews = take_field(&mut map, "reviews", std::mem::take(&mut doc.reviews), |_| Ok(()));

  for key in map.keys() {
    debug!(key = %key, "ignoring unknown key in stored content");
  }

  doc
}

fn take_field<T, V>(map: &mut Map<String, Value>, key: &str, fallback: T, validate: V) -> T
where
  T: DeserializeOwned,
  V: FnOnce(&T) -> Result<(), ValidationError>,
{
  let Some(value) = map.remove(key) else {
    return fallback;
  };

  match serde_json::from_value::<T>(value) {
    Ok(parsed) => match validate(&parsed) {
      Ok(()) => parsed,
      Err(e) => {
        warn!(field = key, error = %e, "stored field breaks an invariant, using default");
        fallback
      }
    },
    Err(e) => {
      warn!(field = key, error = %e, "stored field could not be decoded, using default");
      fallback
    }
  }
}

/// Deja como destacado solo el primer álbum marcado (el que ya mostraba la UI).
fn normalize_featured(albums: &mut [Album]) {
  let mut seen = false;
  for album in albums.iter_mut().filter(|a| a.featured) {
    if seen {
      warn!(album = %album.title, "more than one featured album in stored content, clearing flag");
      album.featured = false;
    }
    seen = true;
  }
}
