//! Error types for roster-core.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of a directory operation. A failed operation never mutates the directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The named activity is not part of the catalog.
    #[error("Activity not found: {activity}")]
    ActivityNotFound { activity: String },

    /// The email is not enrolled in the named activity.
    #[error("Participant not found: {email} is not signed up for {activity}")]
    ParticipantNotFound { activity: String, email: String },

    /// The email is already enrolled in the named activity.
    #[error("Already signed up: {email} is already registered for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    /// The activity has no remaining spots.
    #[error("Activity is full: {activity} has reached its capacity of {capacity}")]
    ActivityFull { activity: String, capacity: u32 },

    /// The email was empty (after trimming whitespace).
    #[error("invalid email: must not be empty")]
    InvalidEmail,
}

/// All errors that can arise while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error, with file path and line context from serde_yaml.
    #[error("failed to parse catalog at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The catalog file did not exist at the given path.
    #[error("catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// An entry parsed fine but breaks a roster invariant.
    #[error("invalid activity '{activity}': {reason}")]
    Invalid { activity: String, reason: String },
}
