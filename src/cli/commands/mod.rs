mod catalog;
mod check;
mod seed;

pub use catalog::cmd_catalog;
pub use check::cmd_check;
pub use seed::cmd_seed;
