//! Table configurations served to the console UI.

pub mod data_table;

pub use data_table::{DataTableConfig, table_config};
