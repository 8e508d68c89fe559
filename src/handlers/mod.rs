pub mod health;
pub mod setup;
