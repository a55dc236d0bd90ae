//! Fixture loading and collection replacement.
//!
//! Seeding is an explicit step run once during bootstrap (or from the CLI).
//! All fixtures are parsed before storage is touched, and the replacement of
//! every collection happens in a single transaction, so a bad fixture leaves
//! the previous contents in place.

use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use super::Store;
use super::repositories::car::CarRepository;
use super::repositories::dealer::DealerRepository;
use super::repositories::review::ReviewRepository;
use crate::entities::prelude::*;
use crate::models::{Car, Dealer, Review};

/// Rows per INSERT statement, keeping well below SQLite's bound-parameter cap.
const SEED_BATCH_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct FixturePaths {
    pub dealerships: PathBuf,
    pub reviews: PathBuf,
    pub cars: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub dealerships: usize,
    pub reviews: usize,
    pub cars: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub dealerships: Vec<Dealer>,
    pub reviews: Vec<Review>,
    pub cars: Vec<Car>,
}

#[derive(Deserialize)]
struct DealershipFile {
    dealerships: Vec<Dealer>,
}

#[derive(Deserialize)]
struct ReviewFile {
    reviews: Vec<Review>,
}

#[derive(Deserialize)]
struct CarFile {
    cars: Vec<Car>,
}

impl Fixtures {
    pub async fn load(paths: &FixturePaths) -> Result<Self> {
        let dealerships: DealershipFile = read_fixture(&paths.dealerships).await?;
        let reviews: ReviewFile = read_fixture(&paths.reviews).await?;
        let cars: CarFile = read_fixture(&paths.cars).await?;

        Ok(Self {
            dealerships: dealerships.dealerships,
            reviews: reviews.reviews,
            cars: cars.cars,
        })
    }
}

async fn read_fixture<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read fixture: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fixture: {}", path.display()))
}

async fn insert_batched<E, A, C>(conn: &C, models: Vec<A>) -> Result<()>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + Clone,
    C: ConnectionTrait,
{
    for chunk in models.chunks(SEED_BATCH_SIZE) {
        E::insert_many(chunk.to_vec())
            .exec_without_returning(conn)
            .await?;
    }
    Ok(())
}

impl Store {
    /// Loads the fixture files and replaces every collection with them.
    pub async fn seed(&self, paths: &FixturePaths) -> Result<SeedReport> {
        let fixtures = Fixtures::load(paths).await?;
        self.replace_collections(fixtures).await
    }

    /// Deletes the current contents of dealerships, reviews and cars and
    /// inserts `fixtures` in their place.
    pub async fn replace_collections(&self, fixtures: Fixtures) -> Result<SeedReport> {
        let report = SeedReport {
            dealerships: fixtures.dealerships.len(),
            reviews: fixtures.reviews.len(),
            cars: fixtures.cars.len(),
        };

        let txn = self.conn.begin().await?;

        Reviews::delete_many().exec(&txn).await?;
        Dealerships::delete_many().exec(&txn).await?;
        Cars::delete_many().exec(&txn).await?;

        let dealerships = fixtures
            .dealerships
            .into_iter()
            .map(DealerRepository::to_active_model)
            .collect();
        insert_batched(&txn, dealerships)
            .await
            .context("Failed to insert dealerships")?;

        let reviews = fixtures
            .reviews
            .into_iter()
            .map(ReviewRepository::to_active_model)
            .collect();
        insert_batched(&txn, reviews)
            .await
            .context("Failed to insert reviews")?;
        // Next review id is max + 1 of the reloaded rows, not of the dropped ones.
        txn.execute_unprepared(
            "UPDATE sqlite_sequence SET seq = (SELECT COALESCE(MAX(id), 0) FROM reviews) \
             WHERE name = 'reviews'",
        )
        .await
        .context("Failed to reset review id sequence")?;

        let cars = fixtures
            .cars
            .into_iter()
            .map(CarRepository::to_active_model)
            .collect();
        insert_batched(&txn, cars)
            .await
            .context("Failed to insert cars")?;

        txn.commit().await?;

        info!(
            dealerships = report.dealerships,
            reviews = report.reviews,
            cars = report.cars,
            "Collections seeded from fixtures"
        );

        Ok(report)
    }
}
