//! Resolving log source names to text.
//!
//! The pipeline never touches the filesystem itself. It asks a `SourceLoader` for the
//! text behind each name and treats a failure as "skip this file".

mod discover;
mod error;
mod loader;
#[cfg(test)]
mod tests;

pub use discover::{discover, resolve_glob};
pub use error::SourceError;
pub use loader::{FsSourceLoader, SourceLoader};
