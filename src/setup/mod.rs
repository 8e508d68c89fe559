//! The one-time setup flow: completion check, form validation and the
//! procedure that creates the schema, the uploads directory and the first admin.

pub mod service;
pub mod status;
pub mod validation;

pub use service::SetupService;
pub use status::is_setup_complete;
pub use validation::{SetupForm, ValidationError};
