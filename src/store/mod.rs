pub mod document;
pub mod entity;
pub mod json_file;
pub mod migrate;
pub mod port;
pub mod sqlite;

pub use entity::{CatalogEntity, CatalogStore};
pub use json_file::FileStorage;
pub use port::{StoragePort, open_port};
pub use sqlite::SqliteStorage;
