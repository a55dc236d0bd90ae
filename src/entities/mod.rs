pub mod prelude;

pub mod car_makes;
pub mod car_models;
pub mod cars;
pub mod dealerships;
pub mod reviews;
