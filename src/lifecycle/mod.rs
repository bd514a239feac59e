//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Init logging → Install signal handlers → Bind → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Log → exit(0)
//! ```

pub mod signals;
pub mod startup;

pub use signals::ShutdownSignal;
pub use startup::{run, StartupError};
