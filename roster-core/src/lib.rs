//! Roster core library: activity catalog types, the shared directory, errors.
//!
//! Public API surface:
//! - [`types`]: newtypes, [`Activity`] and the [`Catalog`] snapshot
//! - [`error`]: [`DirectoryError`] and [`CatalogError`]
//! - [`catalog`]: built-in seed catalog and YAML catalog loading
//! - [`directory`]: [`Directory`], the only stateful component

pub mod catalog;
pub mod directory;
pub mod error;
pub mod types;

pub use directory::Directory;
pub use error::{CatalogError, DirectoryError};
pub use types::{Activity, ActivityName, Catalog, Email};
