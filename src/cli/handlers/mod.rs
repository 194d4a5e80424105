//! Shared command handler patterns

pub mod list;

pub use list::{print_list, print_rows};
