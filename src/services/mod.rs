pub mod catalog_service;
pub use catalog_service::{CatalogError, CatalogService, PopulateReport};

pub mod catalog_service_impl;
pub use catalog_service_impl::SeaOrmCatalogService;

pub mod dealer_service;
pub use dealer_service::{DealerError, DealerService};

pub mod dealer_service_impl;
pub use dealer_service_impl::SeaOrmDealerService;

pub mod inventory_service;
pub use inventory_service::{InventoryError, InventoryService};

pub mod inventory_service_impl;
pub use inventory_service_impl::SeaOrmInventoryService;

pub mod review_service;
pub use review_service::{ReviewError, ReviewService};

pub mod review_service_impl;
pub use review_service_impl::SeaOrmReviewService;

pub mod sentiment;
pub use sentiment::{FixedSentimentAnalyzer, RemoteSentimentAnalyzer, SentimentAnalyzer};
