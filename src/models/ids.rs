//! Entry identifier
//!
//! Entries are identified by a random UUID assigned by the store. The short
//! display form (`ent-` plus the first 8 hex digits) is what the CLI prints
//! and accepts as a lookup prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "ent-";

/// Unique identifier of an [`Entry`](super::Entry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string, with or without the display prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Check whether a user-supplied prefix (e.g. `ent-1a2b` or `1a2b`) matches this ID
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.strip_prefix(DISPLAY_PREFIX).unwrap_or(prefix);
        !prefix.is_empty() && self.0.to_string().starts_with(&prefix.to_lowercase())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for EntryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = EntryId::new();
        let display = id.to_string();
        assert!(display.starts_with("ent-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_parse_with_and_without_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain = EntryId::parse(uuid_str).unwrap();
        let prefixed: EntryId = format!("ent-{}", uuid_str).parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_matches_prefix() {
        let id = EntryId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches_prefix("550e"));
        assert!(id.matches_prefix("ent-550E8400"));
        assert!(!id.matches_prefix("ent-"));
        assert!(!id.matches_prefix("ffff"));
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let id = EntryId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }
}
