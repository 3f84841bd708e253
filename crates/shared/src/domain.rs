use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ShoeId);

impl ShoeId {
    /// Candidate id for a freshly created record: wall-clock milliseconds.
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }
}

impl fmt::Display for ShoeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShoeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeRecord {
    pub id: ShoeId,
    pub shoe_brand: String,
    pub shoe_name: String,
    pub shoe_size: String,
    pub feet_shape: String,
    pub source_link: String,
}

impl ShoeRecord {
    /// First character of the brand, uppercased, for the card avatar.
    pub fn brand_initial(&self) -> String {
        self.shoe_brand
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn matches_filter(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.shoe_name.to_lowercase().contains(needle_lower)
            || self.shoe_brand.to_lowercase().contains(needle_lower)
    }
}

/// Raw form field values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoeDraft {
    pub shoe_brand: String,
    pub shoe_name: String,
    pub shoe_size: String,
    pub feet_shape: String,
    pub source_link: String,
}

impl ShoeDraft {
    pub fn from_record(record: &ShoeRecord) -> Self {
        Self {
            shoe_brand: record.shoe_brand.clone(),
            shoe_name: record.shoe_name.clone(),
            shoe_size: record.shoe_size.clone(),
            feet_shape: record.feet_shape.clone(),
            source_link: record.source_link.clone(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            shoe_brand: self.shoe_brand.trim().to_string(),
            shoe_name: self.shoe_name.trim().to_string(),
            shoe_size: self.shoe_size.trim().to_string(),
            feet_shape: self.feet_shape.trim().to_string(),
            source_link: self.source_link.trim().to_string(),
        }
    }

    pub fn into_record(self, id: ShoeId) -> ShoeRecord {
        let draft = self.trimmed();
        ShoeRecord {
            id,
            shoe_brand: draft.shoe_brand,
            shoe_name: draft.shoe_name,
            shoe_size: draft.shoe_size,
            feet_shape: draft.feet_shape,
            source_link: draft.source_link,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Brand,
    Name,
    #[default]
    Recent,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Recent, SortKey::Brand, SortKey::Name];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Brand => "brand",
            SortKey::Name => "name",
            SortKey::Recent => "recent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Brand => "Brand (A-Z)",
            SortKey::Name => "Name (A-Z)",
            SortKey::Recent => "Most recent",
        }
    }

    /// Unknown selector values fall back to `Recent`.
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "brand" => SortKey::Brand,
            "name" => SortKey::Name,
            _ => SortKey::Recent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
