use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A car in a dealer's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Assigned by storage; fixture records carry none.
    #[serde(default)]
    pub id: i32,
    #[serde(deserialize_with = "super::loose::int")]
    pub dealer_id: i32,
    pub make: String,
    pub model: String,
    #[serde(rename = "bodyType", default)]
    pub body_type: Option<String>,
    pub year: i32,
    pub mileage: i64,
    pub price: i64,
}

/// One row of the make/model catalog, shaped the way the front-end reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarCatalogEntry {
    #[serde(rename = "CarModel")]
    pub model: String,
    #[serde(rename = "CarMake")]
    pub make: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CarType {
    Sedan,
    #[default]
    Suv,
    Wagon,
}

impl CarType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedan => "SEDAN",
            Self::Suv => "SUV",
            Self::Wagon => "WAGON",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SEDAN" => Ok(Self::Sedan),
            "SUV" => Ok(Self::Suv),
            "WAGON" => Ok(Self::Wagon),
            other => Err(format!("Unknown car type: {other}")),
        }
    }
}
