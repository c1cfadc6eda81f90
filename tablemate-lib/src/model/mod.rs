//! Table value models
//!
//! Two representations of a table value exist side by side:
//!
//! - [`TableValue`]: the live, keyed form produced by normalization and
//!   edited by the host settings UI.
//! - [`StoredTableValue`]: the positional form written to storage.

mod cell_type;
mod column;
mod row;
mod stored;
mod table;
pub mod types;
mod value;

pub use cell_type::*;
pub use column::*;
pub use row::*;
pub use stored::*;
pub use table::*;
pub use value::*;
