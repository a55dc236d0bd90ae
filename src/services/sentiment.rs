//! Sentiment annotation of reviews.
//!
//! The verdict comes from an external analyzer. It is best effort: a failed
//! or unintelligible analysis degrades to [`Sentiment::Neutral`] and never
//! fails the request that asked for it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use tracing::warn;

use crate::clients::sentiment::SentimentClient;
use crate::config::SentimentConfig;
use crate::domain::Sentiment;
use crate::models::{Review, ReviewWithSentiment};

/// Maximum concurrent analyzer requests while annotating a review list.
const ANNOTATE_CONCURRENCY: usize = 8;

#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Sentiment;
}

pub struct RemoteSentimentAnalyzer {
    client: SentimentClient,
}

impl RemoteSentimentAnalyzer {
    #[must_use]
    pub const fn new(client: SentimentClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SentimentAnalyzer for RemoteSentimentAnalyzer {
    async fn analyze(&self, text: &str) -> Sentiment {
        match self.client.analyze(text).await {
            Ok(label) => Sentiment::from_label(&label),
            Err(e) => {
                warn!(error = %e, "Sentiment analysis failed, defaulting to neutral");
                Sentiment::Neutral
            }
        }
    }
}

/// Answers every request with the same verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSentimentAnalyzer(pub Sentiment);

#[async_trait]
impl SentimentAnalyzer for FixedSentimentAnalyzer {
    async fn analyze(&self, _text: &str) -> Sentiment {
        self.0
    }
}

pub fn analyzer_from_config(config: &SentimentConfig) -> anyhow::Result<Arc<dyn SentimentAnalyzer>> {
    if !config.enabled {
        return Ok(Arc::new(FixedSentimentAnalyzer::default()));
    }

    let client = SentimentClient::new(
        &config.url,
        Duration::from_secs(config.request_timeout_seconds),
    )?;
    Ok(Arc::new(RemoteSentimentAnalyzer::new(client)))
}

/// Attaches a sentiment to every review, preserving order.
pub async fn annotate(
    analyzer: &dyn SentimentAnalyzer,
    reviews: Vec<Review>,
) -> Vec<ReviewWithSentiment> {
    futures::stream::iter(reviews)
        .map(|review| async move {
            let sentiment = analyzer.analyze(&review.review).await;
            ReviewWithSentiment { review, sentiment }
        })
        .buffered(ANNOTATE_CONCURRENCY)
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeywordAnalyzer;

    #[async_trait]
    impl SentimentAnalyzer for KeywordAnalyzer {
        async fn analyze(&self, text: &str) -> Sentiment {
            if text.contains("great") {
                Sentiment::Positive
            } else if text.contains("awful") {
                Sentiment::Negative
            } else {
                Sentiment::Neutral
            }
        }
    }

    fn review(id: i32, text: &str) -> Review {
        Review {
            id,
            name: "Tester".to_string(),
            dealership: 1,
            review: text.to_string(),
            purchase: false,
            purchase_date: None,
            car_make: None,
            car_model: None,
            car_year: None,
        }
    }

    #[tokio::test]
    async fn annotation_keeps_review_order() {
        let reviews = vec![review(3, "great car"), review(1, "awful wait"), review(2, "fine")];
        let annotated = annotate(&KeywordAnalyzer, reviews).await;

        let ids: Vec<i32> = annotated.iter().map(|r| r.review.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        let verdicts: Vec<Sentiment> = annotated.iter().map(|r| r.sentiment).collect();
        assert_eq!(
            verdicts,
            vec![Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
        );
    }

    #[tokio::test]
    async fn unreachable_analyzer_degrades_to_neutral() {
        let client =
            SentimentClient::new("http://127.0.0.1:9/analyze", Duration::from_millis(200)).unwrap();
        let analyzer = RemoteSentimentAnalyzer::new(client);
        assert_eq!(analyzer.analyze("great").await, Sentiment::Neutral);
    }

    #[test]
    fn disabled_config_uses_fixed_analyzer() {
        let config = SentimentConfig::default();
        assert!(analyzer_from_config(&config).is_ok());
    }
}
