//! Catalog sources for the directory.
//!
//! A directory starts either from the built-in [`seed`] or from a YAML file:
//!
//! ```text
//! Chess Club:
//!   description: Learn strategies and compete in chess tournaments
//!   schedule: Fridays, 3:30 PM - 5:00 PM
//!   max_participants: 12          # `capacity` is accepted too
//!   participants:
//!     - michael@mergington.edu
//! ```
//!
//! Every loaded catalog goes through [`validate`] before it reaches a directory.

use std::collections::HashSet;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::{Activity, Catalog};

// ---------------------------------------------------------------------------
// 1. Built-in seed
// ---------------------------------------------------------------------------

/// The catalog a directory starts from when no file is configured.
pub fn seed() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        "Chess Club",
        Activity::new("Learn strategies and compete in chess tournaments", 12)
            .with_schedule("Fridays, 3:30 PM - 5:00 PM")
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    catalog.insert(
        "Programming Class",
        Activity::new("Learn programming fundamentals and build software projects", 20)
            .with_schedule("Tuesdays and Thursdays, 3:30 PM - 4:30 PM")
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    catalog.insert(
        "Gym Class",
        Activity::new("Physical education and sports activities", 30)
            .with_schedule("Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM")
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    );
    catalog
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load and validate a catalog from a YAML file.
///
/// Returns `CatalogError::CatalogNotFound` if absent,
/// `CatalogError::Parse` (with path + line context) if malformed YAML,
/// `CatalogError::Invalid` if an entry breaks a roster invariant.
pub fn load_catalog_at(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&contents, path)?;
    tracing::info!("loaded {} activities from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parse and validate catalog YAML. `origin` is only used for error messages.
pub fn parse_catalog(contents: &str, origin: &Path) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yaml::from_str(contents).map_err(|e| CatalogError::Parse {
        path: origin.to_path_buf(),
        source: e,
    })?;
    validate(&catalog)?;
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// 3. Validation
// ---------------------------------------------------------------------------

/// Check the invariants a directory relies on: non-empty names, positive
/// capacity, unique non-empty participants without surrounding whitespace, and
/// no roster above capacity.
pub fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    for (name, activity) in catalog {
        let invalid = |reason: String| CatalogError::Invalid {
            activity: name.0.clone(),
            reason,
        };

        if name.0.trim().is_empty() {
            return Err(invalid("activity name must not be empty".to_string()));
        }
        if activity.capacity == 0 {
            return Err(invalid("capacity must be positive".to_string()));
        }

        let mut seen = HashSet::new();
        for email in &activity.participants {
            let trimmed = email.0.trim();
            if trimmed.is_empty() {
                return Err(invalid("participant email must not be empty".to_string()));
            }
            // Signup and unregister match on the trimmed form.
            if trimmed != email.0 {
                return Err(invalid(format!(
                    "participant email '{}' has surrounding whitespace",
                    email.0
                )));
            }
            if !seen.insert(trimmed) {
                return Err(invalid(format!("duplicate participant {email}")));
            }
        }

        if activity.participants.len() > activity.capacity as usize {
            return Err(invalid(format!(
                "{} participants exceed capacity {}",
                activity.participants.len(),
                activity.capacity
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
