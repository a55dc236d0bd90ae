//! Car catalog command handler

use crate::config::Config;
use crate::db::Store;
use crate::services::{CatalogService, SeaOrmCatalogService};

pub async fn cmd_catalog(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let service = SeaOrmCatalogService::new(store);

    let report = service.populate().await?;
    if report.makes_created > 0 || report.models_created > 0 {
        println!(
            "Created {} makes and {} models",
            report.makes_created, report.models_created
        );
    }

    let entries = service.list_car_models().await?;
    println!("Car Models ({} total)", entries.len());
    println!("{:-<40}", "");

    let mut current_make: Option<&str> = None;
    for entry in &entries {
        if current_make != Some(entry.make.as_str()) {
            println!("{}", entry.make);
            current_make = Some(entry.make.as_str());
        }
        println!("  • {}", entry.model);
    }

    Ok(())
}
