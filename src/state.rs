use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::Config;
use crate::db::{SeedReport, Store};
use crate::services::sentiment::analyzer_from_config;
use crate::services::{
    CatalogService, DealerService, InventoryService, ReviewService, SeaOrmCatalogService,
    SeaOrmDealerService, SeaOrmInventoryService, SeaOrmReviewService, SentimentAnalyzer,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub dealer_service: Arc<dyn DealerService>,

    pub review_service: Arc<dyn ReviewService>,

    pub inventory_service: Arc<dyn InventoryService>,

    pub catalog_service: Arc<dyn CatalogService>,

    pub sentiment: Arc<dyn SentimentAnalyzer>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let sentiment = analyzer_from_config(&config.sentiment)?;
        Self::with_analyzer(config, sentiment).await
    }

    /// Builds the state with an explicit sentiment analyzer instead of the
    /// one described by `config.sentiment`.
    pub async fn with_analyzer(
        config: Config,
        sentiment: Arc<dyn SentimentAnalyzer>,
    ) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let dealer_service =
            Arc::new(SeaOrmDealerService::new(store.clone())) as Arc<dyn DealerService>;
        let review_service =
            Arc::new(SeaOrmReviewService::new(store.clone())) as Arc<dyn ReviewService>;
        let inventory_service =
            Arc::new(SeaOrmInventoryService::new(store.clone())) as Arc<dyn InventoryService>;
        let catalog_service =
            Arc::new(SeaOrmCatalogService::new(store.clone())) as Arc<dyn CatalogService>;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            store,
            dealer_service,
            review_service,
            inventory_service,
            catalog_service,
            sentiment,
        })
    }

    /// Builds the state and, when `fixtures.seed_on_startup` is set, replaces
    /// the collections with the fixture contents.
    pub async fn bootstrap(config: Config) -> anyhow::Result<Self> {
        let state = Self::new(config).await?;

        if state.config.read().await.fixtures.seed_on_startup {
            let report = state.seed().await?;
            info!(
                "Seeded {} dealerships, {} reviews, {} cars",
                report.dealerships, report.reviews, report.cars
            );
        }

        Ok(state)
    }

    pub async fn seed(&self) -> anyhow::Result<SeedReport> {
        let paths = self.config.read().await.fixture_paths();
        self.store.seed(&paths).await
    }
}
