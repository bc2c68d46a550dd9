pub mod storage;

pub use storage::{CONTENT_SLOT, MemoryStorage, SlotStorage, StorageError, THEME_SLOT};
