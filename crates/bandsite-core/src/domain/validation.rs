use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use super::content::{Album, BandMember, ContentDocument, TourDate};
use super::field::TextField;

/// Violaciones de los invariantes del documento de contenido.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("`{0}` must not be empty")]
  EmptyText(TextField),

  #[error("duplicate band member name: {0}")]
  DuplicateMember(String),

  #[error("band member name must not be empty")]
  EmptyMemberName,

  #[error("at most one album can be featured, found {0}")]
  MultipleFeatured(usize),

  #[error("invalid album year: {0}")]
  InvalidYear(String),

  #[error("invalid tour date `{0}`, expected YYYY-MM-DD")]
  InvalidDate(String),
}

/// Interpreta una fecha de calendario ISO-8601 (`YYYY-MM-DD`).
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, ValidationError> {
  NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

pub fn validate_text(field: TextField, value: &str) -> Result<(), ValidationError> {
  if field.is_required() && value.trim().is_empty() {
    return Err(ValidationError::EmptyText(field));
  }
  Ok(())
}

/// Los nombres funcionan como identidad estable: no vacíos y sin repetir.
pub fn validate_members(members: &[BandMember]) -> Result<(), ValidationError> {
  let mut seen = HashSet::new();
  for member in members {
    if member.name.trim().is_empty() {
      return Err(ValidationError::EmptyMemberName);
    }
    if !seen.insert(member.name.as_str()) {
      return Err(ValidationError::DuplicateMember(member.name.clone()));
    }
  }
  Ok(())
}

pub fn validate_albums(albums: &[Album]) -> Result<(), ValidationError> {
  let featured = albums.iter().filter(|a| a.featured).count();
  if featured > 1 {
    return Err(ValidationError::MultipleFeatured(featured));
  }
  Ok(())
}

pub fn validate_tour_date(date: &TourDate) -> Result<(), ValidationError> {
  parse_iso_date(&date.date).map(|_| ())
}

pub fn validate_tour_dates(dates: &[TourDate]) -> Result<(), ValidationError> {
  dates.iter().try_for_each(validate_tour_date)
}

/// Comprueba todos los invariantes del documento.
pub fn validate_document(doc: &ContentDocument) -> Result<(), ValidationError> {
  for field in TextField::ALL {
    validate_text(field, field.get(doc))?;
  }
  validate_members(&doc.band_members)?;
  validate_albums(&doc.albums)?;
  validate_tour_dates(&doc.tour_dates)
}
