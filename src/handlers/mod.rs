pub mod health;
pub mod items;
pub mod notes;

pub use health::health_handler;
