use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tema visual de la página. Se guarda como identificador en su propio slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Atmospheric,
  Raw,
  Modern,
}

/// Colores de un tema, como cadenas hex `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
  pub background: &'static str,
  pub text: &'static str,
  pub accent: &'static str,
  pub secondary: &'static str,
  pub border: &'static str,
  pub hover: &'static str,
}

impl Theme {
  pub const ALL: [Theme; 3] = [Theme::Atmospheric, Theme::Raw, Theme::Modern];

  pub fn id(self) -> &'static str {
    match self {
      Theme::Atmospheric => "atmospheric",
      Theme::Raw => "raw",
      Theme::Modern => "modern",
    }
  }

  pub fn from_id(id: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|t| t.id() == id.trim())
  }

  pub fn palette(self) -> Palette {
    match self {
      Theme::Atmospheric => Palette {
        background: "#0a0a0f",
        text: "#f8f8ff",
        accent: "#4a148c",
        secondary: "#1a1a2e",
        border: "#212121",
        hover: "#311b92",
      },
      Theme::Raw => Palette {
        background: "#0f0f0f",
        text: "#e8e8e8",
        accent: "#1b5e20",
        secondary: "#2d2d2d",
        border: "#212121",
        hover: "#1b5e20",
      },
      Theme::Modern => Palette {
        background: "#151515",
        text: "#ffffff",
        accent: "#311b92",
        secondary: "#424242",
        border: "#212121",
        hover: "#4a148c",
      },
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.id())
  }
}

impl FromStr for Theme {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Theme::from_id(s).ok_or_else(|| format!("unknown theme `{s}` (expected atmospheric, raw or modern)"))
  }
}
