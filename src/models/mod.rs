pub mod car;
pub mod dealer;
pub mod loose;
pub mod review;

pub use car::{Car, CarCatalogEntry, CarType};
pub use dealer::Dealer;
pub use review::{NewReview, Review, ReviewWithSentiment};
