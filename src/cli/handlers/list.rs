//! Generic list output
//!
//! List commands share the same tail: convert API models into display rows,
//! then print them in the requested format.

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formattable;

/// Convert `items` into display rows.
///
/// # Type Parameters
///
/// * `T` - The API model type (e.g., `User`, `Message`)
/// * `D` - The display type that implements `From<T>`
pub fn to_rows<T, D: From<T>>(items: Vec<T>) -> Vec<D> {
    items.into_iter().map(D::from).collect()
}

/// Print display rows for a list command.
pub fn print_rows<D>(rows: Vec<D>, resource_name: &str, format: OutputFormat) -> Result<()>
where
    D: Tabled + Serialize,
{
    debug!("Displaying {} {}", rows.len(), resource_name);
    rows.print(format)
}

/// Convert and print API models in one step.
pub fn print_list<T, D>(items: Vec<T>, resource_name: &str, format: OutputFormat) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
{
    print_rows(to_rows::<T, D>(items), resource_name, format)
}
