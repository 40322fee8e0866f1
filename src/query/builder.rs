//! Filter criteria construction and serialization

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Message reported when a search is attempted without any filter
pub const EMPTY_FILTERS_MESSAGE: &str = "enter at least one filter to search";

/// A filter key recognized by the catalog API
///
/// Ordering follows declaration order, which is also the order keys are
/// serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Name,
    Status,
    Species,
    /// Free-text subtype, sent as `type`
    Subtype,
    Gender,
}

impl FilterKey {
    /// All recognized keys in serialization order
    pub const ALL: [FilterKey; 5] = [
        FilterKey::Name,
        FilterKey::Status,
        FilterKey::Species,
        FilterKey::Subtype,
        FilterKey::Gender,
    ];

    /// Query parameter name used on the wire
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Status => "status",
            Self::Species => "species",
            Self::Subtype => "type",
            Self::Gender => "gender",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FilterKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "status" => Ok(Self::Status),
            "species" => Ok(Self::Species),
            "type" | "subtype" => Ok(Self::Subtype),
            "gender" => Ok(Self::Gender),
            other => Err(Error::validation(format!("unknown filter key '{other}'"))),
        }
    }
}

/// Raw filter values as typed by the user
///
/// Values may be empty or padded with whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFilters {
    pub name: String,
    pub status: String,
    pub species: String,
    pub subtype: String,
    pub gender: String,
}

impl RawFilters {
    /// Create an empty set of raw filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name filter
    #[must_use]
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = value.into();
        self
    }

    /// Set the status filter
    #[must_use]
    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = value.into();
        self
    }

    /// Set the species filter
    #[must_use]
    pub fn species(mut self, value: impl Into<String>) -> Self {
        self.species = value.into();
        self
    }

    /// Set the subtype filter
    #[must_use]
    pub fn subtype(mut self, value: impl Into<String>) -> Self {
        self.subtype = value.into();
        self
    }

    /// Set the gender filter
    #[must_use]
    pub fn gender(mut self, value: impl Into<String>) -> Self {
        self.gender = value.into();
        self
    }

    /// Raw value for a key
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Name => &self.name,
            FilterKey::Status => &self.status,
            FilterKey::Species => &self.species,
            FilterKey::Subtype => &self.subtype,
            FilterKey::Gender => &self.gender,
        }
    }
}

/// Validated filter criteria: recognized keys mapped to non-empty, trimmed values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    values: BTreeMap<FilterKey, String>,
}

impl FilterCriteria {
    /// Create empty criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw input, dropping blank values
    pub fn from_raw(raw: &RawFilters) -> Self {
        let mut criteria = Self::new();
        for key in FilterKey::ALL {
            criteria.set(key, raw.get(key));
        }
        criteria
    }

    /// Set a value, trimming it; blank values remove the key
    ///
    /// Returns whether the key is present afterwards.
    pub fn set(&mut self, key: FilterKey, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            self.values.remove(&key);
            false
        } else {
            self.values.insert(key, value.to_string());
            true
        }
    }

    /// Builder-style `set`
    #[must_use]
    pub fn with(mut self, key: FilterKey, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Value for a key
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fail with a validation error when no key is present
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::validation(EMPTY_FILTERS_MESSAGE));
        }
        Ok(())
    }

    /// Present keys and values in serialization order
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `(wire name, value)` pairs in serialization order
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.iter().map(|(k, v)| (k.wire_name(), v))
    }

    /// Form-urlencoded query string, e.g. `name=rick&status=alive`
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}
