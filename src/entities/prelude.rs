pub use super::car_makes::Entity as CarMakes;
pub use super::car_models::Entity as CarModels;
pub use super::cars::Entity as Cars;
pub use super::dealerships::Entity as Dealerships;
pub use super::reviews::Entity as Reviews;
