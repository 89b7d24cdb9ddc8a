//! Headless data-table engine
//!
//! Turns a record collection and column descriptions into the rows a table
//! shows: filtered by a global search and per-column filters, sorted by the
//! clicked column, and sliced into pages. Rendering is left to the host; this
//! crate owns the view state and the actions that change it.
//!
//! ```
//! use models_table::{Action, ColumnSpec, ModelsTable, TableConfig};
//! use models_table::model::Record;
//!
//! let records = vec![
//!     Record::new().set("name", "Bob").set("age", 30),
//!     Record::new().set("name", "Al").set("age", 25),
//! ];
//! let config = TableConfig::default()
//!     .with_columns(vec![ColumnSpec::property("name"), ColumnSpec::property("age")])
//!     .with_filtering_ignore_case(true);
//!
//! let mut table = ModelsTable::new(records, config);
//! table.dispatch(Action::Filter("al".into()));
//! assert_eq!(table.visible_content().len(), 1);
//! ```

pub mod action;
pub mod column;
pub mod config;
pub mod error;
pub mod messages;
pub mod model;
pub mod pipeline;

mod table;

pub use action::*;
pub use column::{Column, ColumnRegistry, ColumnSpec};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use messages::{CustomMessages, Messages, format_message};
pub use table::ModelsTable;

