pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod setup;
pub mod templates;

pub use config::Config;
pub use error::SetupError;
pub use router::{SetupState, setup_router};
