//! Filesystem locations for application data.
//!
//! - [`data_root`] - where tillpoint keeps its state
//! - [`database_path`] - the `SQLite` file inside the data root

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE_NAME, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, resolve_data_root};
