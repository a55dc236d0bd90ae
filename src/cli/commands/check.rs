//! Storage health check

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_check(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    store.ping().await?;

    let counts = store.collection_counts().await?;
    let max_review_id = store.max_review_id().await?;

    println!("Database OK: {}", config.general.database_path);
    println!("{:-<40}", "");
    println!("  Dealerships: {}", counts.dealerships);
    println!("  Reviews:     {}", counts.reviews);
    println!("  Cars:        {}", counts.cars);
    println!(
        "  Next review id: {}",
        max_review_id.map_or(1, |id| id + 1)
    );

    if counts.dealerships == 0 {
        println!();
        println!("No dealerships loaded. Seed with: dealership seed");
    }

    Ok(())
}
