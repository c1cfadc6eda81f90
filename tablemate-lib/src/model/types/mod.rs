//! Cell data types

mod hex_color;
mod select;

pub use hex_color::*;
pub use select::*;
