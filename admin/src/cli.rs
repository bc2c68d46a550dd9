use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bandsite - manage the editable content of the band site
#[derive(Debug, Parser)]
#[command(name = "bandsite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
  /// SQLite database to use instead of the one in bandsite.toml
  #[arg(long, global = true)]
  pub db: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Print the current content
  Show {
    /// Print the raw JSON snapshot
    #[arg(long)]
    json: bool,

    /// Print a single field, e.g. `heroTitle` or `albums.0.tracks.2`
    #[arg(long)]
    path: Option<String>,
  },

  /// Log in, edit one field in place and commit it
  Edit {
    /// Admin password
    #[arg(short, long)]
    password: String,

    /// Field path, e.g. `location`, `bandMembers.1.role`, `tourDates.0.venue`
    path: String,

    /// New text for the field
    value: String,
  },

  /// Mark one album as featured (or none with --none)
  Feature {
    #[arg(short, long)]
    password: String,

    /// Album index
    #[arg(conflicts_with = "none", required_unless_present = "none")]
    index: Option<usize>,

    /// Clear the featured album
    #[arg(long)]
    none: bool,
  },

  /// Restore the default content and delete the stored snapshot
  Reset {
    #[arg(short, long)]
    password: String,
  },

  /// Show the selected theme, or select a new one (atmospheric, raw, modern)
  Theme {
    theme: Option<String>,
  },

  /// Write the current content snapshot to a JSON file
  Export {
    file: PathBuf,
  },

  /// Replace the content with a JSON snapshot file
  Import {
    #[arg(short, long)]
    password: String,

    file: PathBuf,
  },

  /// Print the configuration and data paths in use
  Paths,
}
