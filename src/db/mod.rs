use crate::domain::CarFilter;
use crate::models::{Car, CarCatalogEntry, CarType, Dealer, NewReview, Review};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;
pub mod seed;

pub use seed::{FixturePaths, Fixtures, SeedReport};

/// Handle on the shared connection pool. Cloning is cheap; every clone uses
/// the same pool.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

/// Row counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionCounts {
    pub dealerships: u64,
    pub reviews: u64,
    pub cars: u64,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .with_context(|| format!("Failed to create database file: {path_str}"))?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn dealer_repo(&self) -> repositories::dealer::DealerRepository {
        repositories::dealer::DealerRepository::new(self.conn.clone())
    }

    fn review_repo(&self) -> repositories::review::ReviewRepository {
        repositories::review::ReviewRepository::new(self.conn.clone())
    }

    fn car_repo(&self) -> repositories::car::CarRepository {
        repositories::car::CarRepository::new(self.conn.clone())
    }

    fn catalog_repo(&self) -> repositories::catalog::CatalogRepository {
        repositories::catalog::CatalogRepository::new(self.conn.clone())
    }

    pub async fn list_dealers(&self) -> Result<Vec<Dealer>> {
        self.dealer_repo().list_all().await
    }

    pub async fn list_dealers_by_state(&self, state: &str) -> Result<Vec<Dealer>> {
        self.dealer_repo().list_by_state(state).await
    }

    pub async fn get_dealer(&self, id: i32) -> Result<Option<Dealer>> {
        self.dealer_repo().get(id).await
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.review_repo().list_all().await
    }

    pub async fn list_reviews_for_dealer(&self, dealer_id: i32) -> Result<Vec<Review>> {
        self.review_repo().list_for_dealer(dealer_id).await
    }

    pub async fn insert_review(&self, payload: NewReview) -> Result<Review> {
        self.review_repo().insert(payload).await
    }

    pub async fn max_review_id(&self) -> Result<Option<i32>> {
        self.review_repo().max_id().await
    }

    pub async fn find_cars(&self, dealer_id: i32, filter: &CarFilter) -> Result<Vec<Car>> {
        self.car_repo().find(dealer_id, filter).await
    }

    pub async fn get_or_create_car_make(&self, name: &str, description: &str) -> Result<bool> {
        let (_, created) = self
            .catalog_repo()
            .get_or_create_make(name, description)
            .await?;
        Ok(created)
    }

    pub async fn get_or_create_car_model(
        &self,
        make_name: &str,
        name: &str,
        car_type: CarType,
        year: i32,
    ) -> Result<bool> {
        let repo = self.catalog_repo();
        let (make, _) = repo.get_or_create_make(make_name, "").await?;
        let (_, created) = repo
            .get_or_create_model(make.id, name, car_type, year)
            .await?;
        Ok(created)
    }

    pub async fn list_car_catalog(&self) -> Result<Vec<CarCatalogEntry>> {
        self.catalog_repo().list_entries().await
    }

    pub async fn count_car_makes(&self) -> Result<u64> {
        self.catalog_repo().count_makes().await
    }

    pub async fn collection_counts(&self) -> Result<CollectionCounts> {
        Ok(CollectionCounts {
            dealerships: self.dealer_repo().count().await?,
            reviews: self.review_repo().count().await?,
            cars: self.car_repo().count().await?,
        })
    }
}
