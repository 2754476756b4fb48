//! Locating and loading detector responses from disk.
//!
//! - **discovery**: find response files in a file or directory tree
//! - **reader**: read and parse a response file

pub mod discovery;
pub mod reader;

pub use discovery::{DiscoveredFile, FileDiscovery};
pub use reader::ResponseReader;
