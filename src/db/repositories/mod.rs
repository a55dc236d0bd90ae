pub mod car;
pub mod catalog;
pub mod dealer;
pub mod review;
