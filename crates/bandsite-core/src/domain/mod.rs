pub mod content;
pub mod defaults;
pub mod field;
pub mod session;
pub mod theme;
pub mod validation;

pub use content::{Album, BandMember, ContentDocument, SocialLink, TourDate};
pub use field::{AlbumPart, FieldPath, FieldPathError, FieldUpdate, MemberPart, SocialLinkPart, TextField, TourDatePart};
pub use session::{SessionPhase, SessionState};
pub use theme::{Palette, Theme};
pub use validation::ValidationError;
