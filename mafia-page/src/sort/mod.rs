//! Click-to-sort tables.
//!
//! Headers declaring a value type become clickable. A click flips that
//! header between ascending and descending (never back to unsorted),
//! clears every other header of the same table, and stable-sorts the
//! table body rows in place.

mod engine;
mod value;

pub use engine::{HeaderBinding, TableSorter};
pub use value::{SortDirection, SortKey, SortType, compare, parse_number};
