//! Error types

mod table;
mod validation;

pub use table::*;
pub use validation::*;
