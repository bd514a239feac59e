//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (APP_HOST, APP_PORT, ENVIRONMENT, DEBUG, APP_NAME)
//!     → loader.rs (read & parse, apply defaults)
//!     → validation.rs (range checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc with the request path
//! ```
//!
//! # Design Decisions
//! - Read once at startup; there is no reload
//! - All fields have defaults so an empty environment is valid
//! - A malformed value aborts startup before the listener binds

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_from, ConfigError};
pub use schema::AppConfig;
