//! Device trait table

use super::{element_text, row_cells, ScrapeError, TABLE_ROW};
use crate::domain::TraitRow;
use scraper::Html;

const NAME_CELL: usize = 0;
const DESCRIPTION_CELL: usize = 2;

/// Extract every trait row, in document order.
///
/// Rows without an `id` attribute (headers, spacers) are skipped. A row that
/// has an `id` but lacks the description cell fails the whole parse.
pub fn parse_traits(html: &str) -> Result<Vec<TraitRow>, ScrapeError> {
    let document = Html::parse_document(html);

    let mut rows = document.select(&TABLE_ROW).peekable();
    if rows.peek().is_none() {
        return Err(ScrapeError::MissingElements { what: "table rows" });
    }

    let mut traits = Vec::new();
    for row in rows {
        let id = match row.value().attr("id").map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => continue,
        };

        let cells = row_cells(row);
        if cells.len() <= DESCRIPTION_CELL {
            return Err(ScrapeError::MissingCells {
                row: id.to_string(),
                expected: DESCRIPTION_CELL + 1,
                found: cells.len(),
            });
        }

        traits.push(TraitRow {
            id: id.to_string(),
            name: element_text(cells[NAME_CELL]),
            description: element_text(cells[DESCRIPTION_CELL]),
        });
    }

    tracing::debug!("Parsed {} trait rows", traits.len());
    Ok(traits)
}
