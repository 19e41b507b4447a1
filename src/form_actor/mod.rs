//! Form state machine: the draft, the edit mode, and the committed records.

pub mod controller;
pub mod error;
mod view;

pub use controller::*;
pub use error::*;
pub use view::*;
