//! System configuration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod form_system;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use form_system::*;
pub use telemetry::*;
