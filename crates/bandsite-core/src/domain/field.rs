use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::content::{Album, BandMember, ContentDocument, SocialLink, TourDate};

/// Campos escalares de texto del documento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
  HeroTitle,
  HeroTagline,
  HeroCtaPrimary,
  HeroCtaSecondary,
  BandBio,
  Location,
  Formed,
  Genre,
  PrimaryPlatform,
  PrimaryPlatformUrl,
  Email,
}

impl TextField {
  pub const ALL: [TextField; 11] = [
    TextField::HeroTitle,
    TextField::HeroTagline,
    TextField::HeroCtaPrimary,
    TextField::HeroCtaSecondary,
    TextField::BandBio,
    TextField::Location,
    TextField::Formed,
    TextField::Genre,
    TextField::PrimaryPlatform,
    TextField::PrimaryPlatformUrl,
    TextField::Email,
  ];

  /// Clave del campo en el snapshot JSON.
  pub fn key(self) -> &'static str {
    match self {
      TextField::HeroTitle => "heroTitle",
      TextField::HeroTagline => "heroTagline",
      TextField::HeroCtaPrimary => "heroCtaPrimary",
      TextField::HeroCtaSecondary => "heroCtaSecondary",
      TextField::BandBio => "bandBio",
      TextField::Location => "location",
      TextField::Formed => "formed",
      TextField::Genre => "genre",
      TextField::PrimaryPlatform => "primaryPlatform",
      TextField::PrimaryPlatformUrl => "primaryPlatformUrl",
      TextField::Email => "email",
    }
  }

  /// Los textos del hero nunca pueden quedar vacíos.
  pub fn is_required(self) -> bool {
    matches!(
      self,
      TextField::HeroTitle | TextField::HeroTagline | TextField::HeroCtaPrimary | TextField::HeroCtaSecondary
    )
  }

  /// Campos que admiten saltos de línea al editarse.
  pub fn is_multiline(self) -> bool {
    matches!(self, TextField::BandBio)
  }

  pub fn get(self, doc: &ContentDocument) -> &str {
    match self {
      TextField::HeroTitle => &doc.hero_title,
      TextField::HeroTagline => &doc.hero_tagline,
      TextField::HeroCtaPrimary => &doc.hero_cta_primary,
      TextField::HeroCtaSecondary => &doc.hero_cta_secondary,
      TextField::BandBio => &doc.band_bio,
      TextField::Location => &doc.location,
      TextField::Formed => &doc.formed,
      TextField::Genre => &doc.genre,
      TextField::PrimaryPlatform => &doc.primary_platform,
      TextField::PrimaryPlatformUrl => &doc.primary_platform_url,
      TextField::Email => &doc.email,
    }
  }

  pub fn get_mut(self, doc: &mut ContentDocument) -> &mut String {
    match self {
      TextField::HeroTitle => &mut doc.hero_title,
      TextField::HeroTagline => &mut doc.hero_tagline,
      TextField::HeroCtaPrimary => &mut doc.hero_cta_primary,
      TextField::HeroCtaSecondary => &mut doc.hero_cta_secondary,
      TextField::BandBio => &mut doc.band_bio,
      TextField::Location => &mut doc.location,
      TextField::Formed => &mut doc.formed,
      TextField::Genre => &mut doc.genre,
      TextField::PrimaryPlatform => &mut doc.primary_platform,
      TextField::PrimaryPlatformUrl => &mut doc.primary_platform_url,
      TextField::Email => &mut doc.email,
    }
  }

  pub fn from_key(key: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|f| f.key() == key)
  }
}

impl fmt::Display for TextField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

/// Reemplazo completo de un campo de primer nivel.
///
/// Cada variante lleva el valor ya tipado: no hay forma de pasar una
/// estructura con otra forma. Para cambiar un solo elemento de una lista
/// están las operaciones específicas de `ContentStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
  Text(TextField, String),
  BandMembers(Vec<BandMember>),
  Albums(Vec<Album>),
  TourDates(Vec<TourDate>),
  SocialLinks(Vec<SocialLink>),
  Reviews(Vec<String>),
}

impl FieldUpdate {
  pub fn key(&self) -> &'static str {
    match self {
      FieldUpdate::Text(field, _) => field.key(),
      FieldUpdate::BandMembers(_) => "bandMembers",
      FieldUpdate::Albums(_) => "albums",
      FieldUpdate::TourDates(_) => "tourDates",
      FieldUpdate::SocialLinks(_) => "socialLinks",
      FieldUpdate::Reviews(_) => "reviews",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberPart {
  Name,
  Role,
  Bio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlbumPart {
  Title,
  Year,
  Description,
  Track(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TourDatePart {
  Date,
  Venue,
  City,
  TicketLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialLinkPart {
  Platform,
  Url,
  Handle,
}

/// Ruta hacia una porción de texto concreta del documento.
///
/// Es lo que la vista padre entrega a cada campo editable para saber dónde
/// escribir al confirmar. Forma textual: `location`, `bandMembers.0.name`,
/// `albums.1.tracks.3`, `tourDates.2.ticketLink`, `socialLinks.0.url`,
/// `reviews.4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
  Text(TextField),
  Member { index: usize, part: MemberPart },
  Album { index: usize, part: AlbumPart },
  TourDate { index: usize, part: TourDatePart },
  SocialLink { index: usize, part: SocialLinkPart },
  Review(usize),
}

impl FieldPath {
  /// Si el campo debe editarse en modo multilínea.
  pub fn is_multiline(&self) -> bool {
    match self {
      FieldPath::Text(field) => field.is_multiline(),
      FieldPath::Member { part: MemberPart::Bio, .. } => true,
      FieldPath::Album { part: AlbumPart::Description, .. } => true,
      FieldPath::Review(_) => true,
      _ => false,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field path `{0}`")]
pub struct FieldPathError(pub String);

impl FromStr for FieldPath {
  type Err = FieldPathError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let err = || FieldPathError(s.to_string());
    let segments: Vec<&str> = s.trim().split('.').collect();
    // Solo dígitos ASCII: `usize::from_str` aceptaría también un `+` inicial.
    let index = |i: usize| {
      segments
        .get(i)
        .filter(|v| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|v| v.parse::<usize>().ok())
        .ok_or_else(err)
    };

    let path = match segments.as_slice() {
      [key] if TextField::from_key(key).is_some() => FieldPath::Text(TextField::from_key(key).ok_or_else(err)?),
      ["reviews", _] => FieldPath::Review(index(1)?),
      ["bandMembers" | "members", _, part] => {
        let part = match *part {
          "name" => MemberPart::Name,
          "role" => MemberPart::Role,
          "bio" => MemberPart::Bio,
          _ => return Err(err()),
        };
        FieldPath::Member { index: index(1)?, part }
      }
      ["albums", _, "tracks", _] => FieldPath::Album { index: index(1)?, part: AlbumPart::Track(index(3)?) },
      ["albums", _, part] => {
        let part = match *part {
          "title" => AlbumPart::Title,
          "year" => AlbumPart::Year,
          "description" => AlbumPart::Description,
          _ => return Err(err()),
        };
        FieldPath::Album { index: index(1)?, part }
      }
      ["tourDates", _, part] => {
        let part = match *part {
          "date" => TourDatePart::Date,
          "venue" => TourDatePart::Venue,
          "city" => TourDatePart::City,
          "ticketLink" => TourDatePart::TicketLink,
          _ => return Err(err()),
        };
        FieldPath::TourDate { index: index(1)?, part }
      }
      ["socialLinks", _, part] => {
        let part = match *part {
          "platform" => SocialLinkPart::Platform,
          "url" => SocialLinkPart::Url,
          "handle" => SocialLinkPart::Handle,
          _ => return Err(err()),
        };
        FieldPath::SocialLink { index: index(1)?, part }
      }
      _ => return Err(err()),
    };

    Ok(path)
  }
}

impl fmt::Display for FieldPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FieldPath::Text(field) => write!(f, "{field}"),
      FieldPath::Member { index, part } => {
        let part = match part {
          MemberPart::Name => "name",
          MemberPart::Role => "role",
          MemberPart::Bio => "bio",
        };
        write!(f, "bandMembers.{index}.{part}")
      }
      FieldPath::Album { index, part } => match part {
        AlbumPart::Title => write!(f, "albums.{index}.title"),
        AlbumPart::Year => write!(f, "albums.{index}.year"),
        AlbumPart::Description => write!(f, "albums.{index}.description"),
        AlbumPart::Track(track) => write!(f, "albums.{index}.tracks.{track}"),
      },
      FieldPath::TourDate { index, part } => {
        let part = match part {
          TourDatePart::Date => "date",
          TourDatePart::Venue => "venue",
          TourDatePart::City => "city",
          TourDatePart::TicketLink => "ticketLink",
        };
        write!(f, "tourDates.{index}.{part}")
      }
      FieldPath::SocialLink { index, part } => {
        let part = match part {
          SocialLinkPart::Platform => "platform",
          SocialLinkPart::Url => "url",
          SocialLinkPart::Handle => "handle",
        };
        write!(f, "socialLinks.{index}.{part}")
      }
      FieldPath::Review(index) => write!(f, "reviews.{index}"),
    }
  }
}
