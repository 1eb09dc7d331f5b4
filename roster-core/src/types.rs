//! Domain types for the activity roster.
//!
//! All types are serializable/deserializable via serde; the same shapes are used
//! for the HTTP JSON payloads and for YAML catalog files.

use std::borrow::Borrow;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// The unique name of an activity in the catalog (e.g. "Chess Club").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityName(pub String);

impl ActivityName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ActivityName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ActivityName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Borrow<str> for ActivityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A participant's email address. Treated as an opaque identifier; only
/// emptiness is checked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(pub String);

impl Email {
    /// Trim surrounding whitespace and reject empty input.
    pub fn parse(raw: &str) -> Result<Self, DirectoryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DirectoryError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Email {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Email {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single activity: display metadata, a capacity, and the enrolled participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// Maximum number of participants.
    #[serde(alias = "max_participants")]
    pub capacity: u32,
    /// Enrolled participants in signup order. Unique within the activity.
    #[serde(default)]
    pub participants: Vec<Email>,
}

impl Activity {
    pub fn new(description: impl Into<String>, capacity: u32) -> Self {
        Self {
            description: description.into(),
            schedule: None,
            capacity,
            participants: Vec::new(),
        }
    }

    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    pub fn with_participants<I, E>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Email>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p.as_str() == email)
    }

    pub fn remaining_spots(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.capacity.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.remaining_spots() == 0
    }
}

/// An owned snapshot of the directory: activity name → [`Activity`], ordered by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(BTreeMap<ActivityName, Activity>);

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an activity; returns the previous entry for that name.
    pub fn insert(&mut self, name: impl Into<ActivityName>, activity: Activity) -> Option<Activity> {
        self.0.insert(name.into(), activity)
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.0.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ActivityName, Activity> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = (&'a ActivityName, &'a Activity);
    type IntoIter = btree_map::Iter<'a, ActivityName, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(ActivityName, Activity)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (ActivityName, Activity)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(ActivityName::from("Chess Club").to_string(), "Chess Club");
        assert_eq!(Email::from("a@b.example").to_string(), "a@b.example");
    }

    #[test]
    fn email_parse_trims_and_rejects_blank() {
        assert_eq!(Email::parse("  a@b.example \n").unwrap().as_str(), "a@b.example");
        assert_eq!(Email::parse("   ").unwrap_err(), DirectoryError::InvalidEmail);
        assert_eq!(Email::parse("").unwrap_err(), DirectoryError::InvalidEmail);
    }

    #[test]
    fn remaining_spots_never_underflows() {
        let activity = Activity::new("Tiny", 1).with_participants(["a@x", "b@x"]);
        assert_eq!(activity.remaining_spots(), 0);
        assert!(activity.is_full());
    }

    #[test]
    fn catalog_lookup_by_str() {
        let mut catalog = Catalog::new();
        catalog.insert("Chess Club", Activity::new("chess", 12));
        assert!(catalog.contains("Chess Club"));
        assert!(catalog.get("chess club").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn catalog_json_shape() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Chess Club",
            Activity::new("chess", 12).with_participants(["michael@mergington.edu"]),
        );
        let json = serde_json::to_value(&catalog).expect("serialize");
        assert_eq!(json["Chess Club"]["capacity"], 12);
        assert_eq!(json["Chess Club"]["participants"][0], "michael@mergington.edu");
        assert!(json["Chess Club"].get("schedule").is_none());
    }

    #[test]
    fn max_participants_alias_is_accepted() {
        let yaml = "Chess Club:\n  description: chess\n  max_participants: 12\n";
        let catalog: Catalog = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(catalog.get("Chess Club").unwrap().capacity, 12);
        assert!(catalog.get("Chess Club").unwrap().participants.is_empty());
    }
}
