use serde::{Deserialize, Serialize};

use crate::domain::Sentiment;

/// A stored review. `dealership` references `Dealer::id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(deserialize_with = "super::loose::int")]
    pub id: i32,
    pub name: String,
    #[serde(deserialize_with = "super::loose::int")]
    pub dealership: i32,
    pub review: String,
    #[serde(default, deserialize_with = "super::loose::flag")]
    pub purchase: bool,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub car_make: Option<String>,
    #[serde(default)]
    pub car_model: Option<String>,
    #[serde(default, deserialize_with = "super::loose::opt_int")]
    pub car_year: Option<i32>,
}

/// Review submission payload. Every field is optional on the wire so that
/// missing required fields surface as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::loose::opt_int")]
    pub dealership: Option<i32>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default, deserialize_with = "super::loose::flag")]
    pub purchase: bool,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub car_make: Option<String>,
    #[serde(default)]
    pub car_model: Option<String>,
    #[serde(default, deserialize_with = "super::loose::opt_int")]
    pub car_year: Option<i32>,
}

impl NewReview {
    /// Names of the required fields that are absent or blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(self.name.as_deref()) {
            missing.push("name");
        }
        if self.dealership.is_none() {
            missing.push("dealership");
        }
        if is_blank(self.review.as_deref()) {
            missing.push("review");
        }
        missing
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// A review annotated with the analyzer's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewWithSentiment {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_fields_are_reported() {
        let payload: NewReview =
            serde_json::from_str(r#"{"name": "Ann", "review": "   ", "purchase": true}"#).unwrap();
        assert_eq!(payload.missing_fields(), vec!["dealership", "review"]);
    }

    #[test]
    fn complete_payload_has_no_missing_fields() {
        let payload: NewReview = serde_json::from_str(
            r#"{"name": "Ann", "dealership": "15", "review": "Great", "purchase": false,
                "purchase_date": "02/16/2021", "car_make": "Audi", "car_model": "A6", "car_year": 2010}"#,
        )
        .unwrap();
        assert!(payload.missing_fields().is_empty());
        assert_eq!(payload.dealership, Some(15));
    }

    #[test]
    fn sentiment_is_flattened_into_the_review() {
        let annotated = ReviewWithSentiment {
            review: Review {
                id: 1,
                name: "Berkly Shepley".to_string(),
                dealership: 15,
                review: "Total grid-enabled service-desk".to_string(),
                purchase: true,
                purchase_date: Some("07/11/2020".to_string()),
                car_make: Some("Audi".to_string()),
                car_model: Some("A6".to_string()),
                car_year: Some(2010),
            },
            sentiment: Sentiment::Positive,
        };

        let json = serde_json::to_value(&annotated).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["dealership"], 15);
        assert_eq!(json["sentiment"], "positive");
    }
}
