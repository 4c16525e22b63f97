pub mod check_models;
pub mod serve;

pub use check_models::check_models;
pub use serve::serve;
