use serde::{Deserialize, Serialize};

/// Documento completo con todos los textos de la página.
///
/// Es la única fuente de verdad para el contenido visible: hero, biografía,
/// miembros, discografía, fechas de gira, redes y reseñas. Se serializa tal
/// cual (claves en camelCase) en el slot de contenido del almacenamiento local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
  // --- Hero ---
  pub hero_title: String,
  pub hero_tagline: String,
  pub hero_cta_primary: String,
  pub hero_cta_secondary: String,

  // --- About ---
  /// Biografía libre; puede contener varios párrafos separados por `\n\n`.
  pub band_bio: String,
  /// Miembros en orden de aparición. El `name` funciona como clave estable.
  pub band_members: Vec<BandMember>,
  pub location: String,
  pub formed: String,
  pub genre: String,

  // --- Music ---
  pub albums: Vec<Album>,
  /// Nombre de la plataforma externa principal (Spotify, Bandcamp…).
  pub primary_platform: String,
  pub primary_platform_url: String,

  // --- Tour ---
  /// Orden de inserción, no cronológico.
  pub tour_dates: Vec<TourDate>,

  // --- Contact / community ---
  pub email: String,
  pub social_links: Vec<SocialLink>,
  pub reviews: Vec<String>,
}

/// Un integrante de la banda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandMember {
  pub name: String,
  pub role: String,
  pub bio: String,
}

/// Un lanzamiento del catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
  pub title: String,
  pub year: i32,
  pub tracks: Vec<String>,
  pub description: String,
  /// Como mucho un álbum del documento puede estar destacado.
  pub featured: bool,
}

/// Una fecha de la gira.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDate {
  /// Fecha de calendario ISO-8601 (`YYYY-MM-DD`).
  pub date: String,
  pub venue: String,
  pub city: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ticket_link: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sold_out: Option<bool>,
}

impl TourDate {
  /// `true` solo si la fecha está marcada explícitamente como agotada.
  pub fn is_sold_out(&self) -> bool {
    self.sold_out.unwrap_or(false)
  }
}

/// Enlace a una red social. `platform` es la etiqueta visible (no única).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
  pub platform: String,
  pub url: String,
  pub handle: String,
}

impl ContentDocument {
  /// Primer álbum marcado como destacado.
  ///
  /// Los snapshots antiguos pueden traer varios `featured = true`; en ese caso
  /// gana el primero en orden de catálogo.
  pub fn featured_album(&self) -> Option<&Album> {
    self.albums.iter().find(|a| a.featured)
  }

  /// Copia de las fechas de gira ordenada por fecha.
  ///
  /// Las fechas que no se pueden interpretar van al final, en su orden
  /// original. El documento no se modifica.
  pub fn tour_dates_by_date(&self) -> Vec<TourDate> {
    let mut dates = self.tour_dates.clone();
    dates.sort_by_key(|d| {
      let parsed = crate::domain::validation::parse_iso_date(&d.date).ok();
      (parsed.is_none(), parsed)
    });
    dates
  }

  /// Párrafos de la biografía, sin líneas vacías.
  pub fn bio_paragraphs(&self) -> impl Iterator<Item = &str> {
    self.band_bio.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn date(date: &str, venue: &str) -> TourDate {
    TourDate { date: date.into(), venue: venue.into(), city: "Oslo".into(), ticket_link: None, sold_out: None }
  }

  #[test]
  fn test_json_round_trip_uses_camel_case_keys() {
    let doc = ContentDocument::default();
    let json = serde_json::to_value(&doc).unwrap();

    assert!(json.get("heroTitle").is_some());
    assert!(json.get("primaryPlatformUrl").is_some());
    assert!(json.get("hero_title").is_none());

    let back: ContentDocument = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
  }

  #[test]
  fn test_tour_date_optional_fields_are_omitted() {
    let json = serde_json::to_value(date("2026-05-01", "Rockefeller")).unwrap();
    assert!(json.get("ticketLink").is_none());
    assert!(json.get("soldOut").is_none());

    let full = TourDate { ticket_link: Some("https://t.example".into()), sold_out: Some(true), ..date("2026-05-01", "X") };
    let json = serde_json::to_value(&full).unwrap();
    assert_eq!(json["ticketLink"], "https://t.example");
    assert_eq!(json["soldOut"], true);
  }

  #[test]
  fn test_featured_album_first_match_wins() {
    let mut doc = ContentDocument::default();
    for album in &mut doc.albums {
      album.featured = true;
    }
    let first = doc.albums[0].title.clone();
    assert_eq!(doc.featured_album().map(|a| a.title.clone()), Some(first));

    for album in &mut doc.albums {
      album.featured = false;
    }
    assert!(doc.featured_album().is_none());
  }

  #[test]
  fn test_tour_dates_by_date_keeps_document_order() {
    let mut doc = ContentDocument::default();
    doc.tour_dates = vec![date("2026-09-10", "C"), date("not a date", "Z"), date("2026-03-01", "A")];

    let sorted: Vec<_> = doc.tour_dates_by_date().into_iter().map(|d| d.venue).collect();
    assert_eq!(sorted, vec!["A", "C", "Z"]);

    let original: Vec<_> = doc.tour_dates.iter().map(|d| d.venue.as_str()).collect();
    assert_eq!(original, vec!["C", "Z", "A"]);
  }

  #[test]
  fn test_bio_paragraphs_skip_blank_blocks() {
    let mut doc = ContentDocument::default();
    doc.band_bio = "First.\n\n\n\nSecond.\n\n  ".into();
    assert_eq!(doc.bio_paragraphs().collect::<Vec<_>>(), vec!["First.", "Second."]);
  }
}
