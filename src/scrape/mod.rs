//! Table extraction from the smart-home documentation pages
//!
//! Each submodule reads exactly one page layout:
//! - `traits`: rows of the device trait table, keyed by their `id` attribute
//! - `types`: code-styled links naming device types, with descriptions
//!   looked up from a companion table
//!
//! Parsers take the raw HTML and return every row before anything is
//! rendered, so a parse-shape failure never leaves partial output behind.

use crate::utils::normalize_cell_text;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use thiserror::Error;

pub mod traits;
pub mod types;

pub use traits::parse_traits;
pub use types::parse_types;

pub(crate) static TABLE_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("valid selector"));

/// The page did not have the expected table structure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrapeError {
    #[error("no {what} found in document")]
    MissingElements { what: &'static str },

    #[error("row `{row}` has {found} cells, expected at least {expected}")]
    MissingCells { row: String, expected: usize, found: usize },
}

/// Direct `td`/`th` children of a table row.
pub(crate) fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .collect()
}

/// Normalized descendant text of an element.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    normalize_cell_text(&element.text().collect::<String>())
}
