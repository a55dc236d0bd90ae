//! Domain types for the dealership service with strong typing.
//!
//! Identifiers are wrapped in newtypes so a dealer id can never be passed where
//! a review id is expected. The range classifier and the inventory query router
//! live in their own submodules.

pub mod inventory_query;
pub mod range;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use inventory_query::{CarFilter, InventoryQuery};
pub use range::{Bucket, RangeClassifier, Tier};

/// Unique identifier for a dealership.
///
/// Reviews reference dealers loosely (the fixtures mix `"15"` and `15`), so
/// both deserialization and `FromStr` accept either form.
///
/// # Examples
///
/// ```rust
/// use dealership::domain::DealerId;
///
/// let id: DealerId = "15".parse().unwrap();
/// assert_eq!(id.value(), 15);
/// assert_eq!(id.to_string(), "15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DealerId(i32);

impl DealerId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for DealerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DealerId> for i32 {
    fn from(id: DealerId) -> Self {
        id.0
    }
}

impl From<i32> for DealerId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

/// Error returned when a path segment is not a valid dealer id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid dealer id: {0}")]
pub struct InvalidDealerId(pub String);

impl FromStr for DealerId {
    type Err = InvalidDealerId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self::new)
            .map_err(|_| InvalidDealerId(s.to_string()))
    }
}

impl Serialize for DealerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for DealerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::models::loose::int(deserializer).map(Self::new)
    }
}

/// Sentiment label attached to a review by the external analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Maps an analyzer label onto a sentiment. Unknown labels are neutral.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dealer_id_conversions() {
        let id = DealerId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(id), 42);
        assert_eq!(DealerId::from(42), id);
    }

    #[test]
    fn dealer_id_parses_path_segments() {
        assert_eq!("7".parse::<DealerId>(), Ok(DealerId::new(7)));
        assert_eq!(" 7 ".parse::<DealerId>(), Ok(DealerId::new(7)));
        assert!("seven".parse::<DealerId>().is_err());
        assert!("".parse::<DealerId>().is_err());
    }

    #[test]
    fn dealer_id_accepts_string_or_number() {
        let from_number: DealerId = serde_json::from_str("15").unwrap();
        let from_string: DealerId = serde_json::from_str("\"15\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(serde_json::to_string(&from_string).unwrap(), "15");
    }

    #[test]
    fn sentiment_labels() {
        assert_eq!(Sentiment::from_label("positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label(" NEGATIVE "), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("mixed"), Sentiment::Neutral);
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
    }
}
