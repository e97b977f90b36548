//! Document store collaborator and its SQLCipher implementation
pub mod document_store;
pub mod filter;
pub mod item_db_conn;
pub mod item_db_ops;

pub use document_store::DocumentStore;
pub use filter::ItemFilter;
pub use item_db_conn::{open_default_item_db, open_item_db};
pub use item_db_ops::SqliteDocumentStore;
