//! The activity directory: the shared, in-memory roster store.
//!
//! One coarse lock guards the whole catalog. Every mutating call validates
//! fully before it touches the roster, so a failed call leaves the directory
//! exactly as it was.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog;
use crate::error::{CatalogError, DirectoryError};
use crate::types::{Activity, Catalog, Email};

/// Process-wide roster store. Construct once and share it (e.g. behind an `Arc`).
#[derive(Debug)]
pub struct Directory {
    activities: RwLock<Catalog>,
}

impl Directory {
    /// Wrap a catalog without checking it. Callers own the invariants that
    /// [`catalog::validate`] enforces; use [`Directory::try_new`] otherwise.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            activities: RwLock::new(catalog),
        }
    }

    /// Validate `catalog` and wrap it.
    pub fn try_new(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog::validate(&catalog)?;
        Ok(Self::new(catalog))
    }

    /// A directory populated from the built-in seed catalog.
    pub fn seeded() -> Self {
        Self::new(catalog::seed())
    }

    /// Owned snapshot of every activity, ordered by name.
    pub fn list_activities(&self) -> Catalog {
        self.read().clone()
    }

    /// Number of activities, without copying the catalog.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Owned copy of a single activity.
    pub fn get_activity(&self, activity: &str) -> Result<Activity, DirectoryError> {
        self.read()
            .get(activity)
            .cloned()
            .ok_or_else(|| not_found(activity))
    }

    /// Enroll `email` in `activity` and return the confirmation message.
    ///
    /// Checks, in order: the activity exists, the email is non-empty, the email
    /// is not already enrolled, and the activity has a free spot.
    pub fn signup(&self, activity: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.write();
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| not_found(activity))?;
        let email = Email::parse(email)?;

        if entry.has_participant(email.as_str()) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity.to_owned(),
                email: email.0,
            });
        }
        if entry.is_full() {
            return Err(DirectoryError::ActivityFull {
                activity: activity.to_owned(),
                capacity: entry.capacity,
            });
        }

        let message = format!("Signed up {email} for {activity}");
        entry.participants.push(email);
        tracing::debug!(
            "{activity}: {} of {} spots taken",
            entry.participants.len(),
            entry.capacity
        );
        Ok(message)
    }

    /// Remove `email` from `activity` and return the confirmation message.
    ///
    /// Removing someone who is not enrolled is an error, not a no-op.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.write();
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| not_found(activity))?;
        let email = email.trim();

        let Some(index) = entry.participants.iter().position(|p| p.as_str() == email) else {
            return Err(DirectoryError::ParticipantNotFound {
                activity: activity.to_owned(),
                email: email.to_owned(),
            });
        };

        entry.participants.remove(index);
        Ok(format!("Unregistered {email} from {activity}"))
    }

    // Lock poisoning is recovered: nothing is mutated before validation passes,
    // so a panicking holder cannot leave a half-applied change behind.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.activities.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::seeded()
    }
}

fn not_found(activity: &str) -> DirectoryError {
    DirectoryError::ActivityNotFound {
        activity: activity.to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
