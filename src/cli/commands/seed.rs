//! Seed command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let paths = config.fixture_paths();
    println!("Seeding from:");
    println!("  dealerships: {}", paths.dealerships.display());
    println!("  reviews:     {}", paths.reviews.display());
    println!("  cars:        {}", paths.cars.display());

    let report = store.seed(&paths).await?;

    println!();
    println!("Collections replaced");
    println!("{:-<40}", "");
    println!("  Dealerships: {}", report.dealerships);
    println!("  Reviews:     {}", report.reviews);
    println!("  Cars:        {}", report.cars);

    Ok(())
}
