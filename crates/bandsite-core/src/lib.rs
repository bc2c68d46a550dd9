pub mod domain;
pub mod editor;
pub mod errors;
pub mod ports;
pub mod services;

pub use errors::ContentError;
