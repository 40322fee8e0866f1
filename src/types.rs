//! Common types used throughout catalog-fetch
//!
//! This module contains the catalog record and the page envelope the
//! remote API wraps records in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Enumerated Fields
// ============================================================================

/// Life status of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    Alive,
    Dead,
    #[default]
    Unknown,
}

impl Status {
    /// Parse a status case-insensitively; anything unrecognized is `Unknown`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }

    /// Value as the API spells it
    pub fn as_api_str(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_api_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Gender of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    Female,
    Male,
    Genderless,
    #[default]
    Unknown,
}

impl Gender {
    /// Parse a gender case-insensitively; anything unrecognized is `Unknown`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "female" => Self::Female,
            "male" => Self::Male,
            "genderless" => Self::Genderless,
            _ => Self::Unknown,
        }
    }

    /// Value as the API spells it
    pub fn as_api_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Genderless => "Genderless",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Genderless => "Genderless",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_api_str())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

// ============================================================================
// Records
// ============================================================================

/// Reference to a named location
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    /// Location URI, empty when the location is unknown
    #[serde(default)]
    pub url: String,
}

/// A catalog record
///
/// Records are never modified once decoded; the engine only concatenates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub status: Status,
    pub species: String,
    /// Free-text subtype, empty when the catalog has none
    #[serde(rename = "type", default)]
    pub subtype: String,
    pub gender: Gender,
    pub origin: LocationRef,
    #[serde(default)]
    pub location: LocationRef,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Character {
    /// Subtype, if one is set
    pub fn subtype(&self) -> Option<&str> {
        let subtype = self.subtype.trim();
        (!subtype.is_empty()).then_some(subtype)
    }
}

// ============================================================================
// Page Envelope
// ============================================================================

/// Pagination metadata returned with every page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total records across all pages
    pub count: u64,
    /// Total number of pages
    pub pages: u32,
    /// URL of the next page
    pub next: Option<String>,
    /// URL of the previous page
    pub prev: Option<String>,
}

impl PageInfo {
    /// Whether the API advertises a further page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// One page of results as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope {
    pub info: PageInfo,
    #[serde(default)]
    pub results: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn rick_json() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
            "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "episode": ["https://rickandmortyapi.com/api/episode/1"],
            "url": "https://rickandmortyapi.com/api/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        })
    }

    #[test]
    fn test_character_deserialize() {
        let rick: Character = serde_json::from_value(rick_json()).unwrap();
        assert_eq!(rick.id, 1);
        assert_eq!(rick.name, "Rick Sanchez");
        assert_eq!(rick.status, Status::Alive);
        assert_eq!(rick.gender, Gender::Male);
        assert_eq!(rick.subtype(), None);
        assert_eq!(rick.origin.name, "Earth (C-137)");
        assert_eq!(rick.episode.len(), 1);
        assert!(rick.created.is_some());
    }

    #[test]
    fn test_character_minimal_fields() {
        let value = json!({
            "id": 7,
            "name": "Abradolf Lincler",
            "status": "unknown",
            "species": "Human",
            "type": "Genetic experiment",
            "gender": "Male",
            "origin": {"name": "Earth (Replacement Dimension)"},
            "image": "https://example.com/7.jpeg"
        });
        let character: Character = serde_json::from_value(value).unwrap();
        assert_eq!(character.status, Status::Unknown);
        assert_eq!(character.subtype(), Some("Genetic experiment"));
        assert_eq!(character.location, LocationRef::default());
        assert!(character.created.is_none());
    }

    #[test]
    fn test_character_serializes_wire_shape() {
        let rick: Character = serde_json::from_value(rick_json()).unwrap();
        let value = serde_json::to_value(&rick).unwrap();
        assert_eq!(value["type"], "");
        assert_eq!(value["status"], "Alive");
        assert_eq!(value["gender"], "Male");
    }

    #[test_case("Alive", Status::Alive)]
    #[test_case("alive", Status::Alive)]
    #[test_case("DEAD", Status::Dead)]
    #[test_case("unknown", Status::Unknown)]
    #[test_case("zombie", Status::Unknown)]
    fn test_status_parse(input: &str, expected: Status) {
        assert_eq!(Status::parse(input), expected);
    }

    #[test_case("Female", Gender::Female)]
    #[test_case("male", Gender::Male)]
    #[test_case("Genderless", Gender::Genderless)]
    #[test_case("unknown", Gender::Unknown)]
    #[test_case("", Gender::Unknown)]
    fn test_gender_parse(input: &str, expected: Gender) {
        assert_eq!(Gender::parse(input), expected);
    }

    #[test]
    fn test_page_envelope_deserialize() {
        let value = json!({
            "info": {
                "count": 826,
                "pages": 42,
                "next": "https://rickandmortyapi.com/api/character?page=2",
                "prev": null
            },
            "results": [rick_json()]
        });
        let page: PageEnvelope = serde_json::from_value(value).unwrap();
        assert_eq!(page.info.count, 826);
        assert_eq!(page.info.pages, 42);
        assert!(page.info.has_next());
        assert!(page.info.prev.is_none());
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn test_page_info_without_next() {
        let info: PageInfo =
            serde_json::from_value(json!({"count": 3, "pages": 1, "next": null, "prev": null}))
                .unwrap();
        assert!(!info.has_next());
    }
}
