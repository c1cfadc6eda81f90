//! TableMate table field value pipeline.
//!
//! A table field holds a grid of typed cells. The host CMS hands this crate
//! the raw value its settings UI submits; the crate normalizes it into typed
//! cells, validates it, converts it to a compact storage form and extracts
//! search keywords.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tablemate_lib::normalize;
//! use tablemate_lib::serialize::to_json;
//! use tablemate_lib::validate::validate_table;
//!
//! let table = normalize(&json!({
//!     "columns": {
//!         "c1": {"heading": "Name", "type": "singleline"},
//!         "c2": {"heading": "Tint", "type": "color"}
//!     },
//!     "rows": [{"c1": "  Sky  ", "c2": "0af"}]
//! }))
//! .unwrap();
//!
//! assert!(validate_table(&table).is_valid());
//! assert_eq!(
//!     to_json(&table).unwrap(),
//!     r##"{"columns":[{"heading":"Name","type":"singleline"},{"heading":"Tint","type":"color"}],"rows":[["Sky","#00aaff"]]}"##
//! );
//! ```

pub mod emoji;
pub mod error;
mod field;
pub mod keywords;
pub mod model;
pub mod normalize;
pub mod serialize;
pub mod settings;
pub mod validate;

pub use error::CellError;
pub use error::TableError;
pub use error::ValidationResult;
pub use field::TableField;
pub use model::CellType;
pub use model::CellValue;
pub use model::StoredTableValue;
pub use model::TableValue;
pub use normalize::normalize;
pub use normalize::normalize_str;
pub use settings::FieldSettings;
