use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    #[serde(deserialize_with = "super::loose::int")]
    pub id: i32,
    pub full_name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub zip: String,
    pub state: String,
}
