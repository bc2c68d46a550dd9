pub mod content_store;
pub mod session_store;
pub mod snapshot;
pub mod theme_store;

pub use content_store::ContentStore;
pub use session_store::{ADMIN_PASSWORD, LOGIN_FAILED_MESSAGE, SessionStore};
pub use theme_store::ThemeStore;
