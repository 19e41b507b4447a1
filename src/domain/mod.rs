pub mod choice;
pub mod field;
pub mod rating;
pub mod record;

pub use choice::*;
pub use field::*;
pub use rating::*;
pub use record::*;
