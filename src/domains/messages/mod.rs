pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::{Message, MessageDraft};
pub use store::{MessageStore, StoreError};
