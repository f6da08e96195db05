//! Device type table

use super::{element_text, row_cells, ScrapeError, TABLE_ROW};
use crate::domain::TypeRow;
use crate::utils::to_camel_case;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

static TYPE_CODE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td a > code").expect("valid selector"));
static ANCHOR_TARGET: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[id], [name], a[href]").expect("valid selector"));

/// Extract every device type, in document order of its code element.
///
/// Descriptions come from the second cell of the row whose first cell is the
/// anchor target for the lowercased identifier. A type without such a row
/// gets an empty description.
pub fn parse_types(html: &str) -> Result<Vec<TypeRow>, ScrapeError> {
    let document = Html::parse_document(html);
    let descriptions = DescriptionIndex::build(&document);

    let mut types = Vec::new();
    for code in document.select(&TYPE_CODE) {
        let identifier = element_text(code);
        if identifier.is_empty() {
            // An empty identifier would render as a bare `,` variant.
            tracing::debug!("Skipping linked code element with no text");
            continue;
        }

        let key = identifier.to_lowercase();
        let description = match descriptions.get(&key) {
            Some(description) => description.to_string(),
            None => {
                tracing::debug!("No description row for '{}'", key);
                String::new()
            }
        };

        types.push(TypeRow { display_name: to_camel_case(&key), identifier, description });
    }

    if types.is_empty() {
        return Err(ScrapeError::MissingElements { what: "linked code elements in table cells" });
    }

    tracing::debug!("Parsed {} device types", types.len());
    Ok(types)
}

/// Second-cell text of each table row, keyed by the anchor targets found in
/// the row's first cell. The first row claiming a target wins.
struct DescriptionIndex {
    by_target: HashMap<String, String>,
}

impl DescriptionIndex {
    fn build(document: &Html) -> Self {
        let mut by_target = HashMap::new();
        for row in document.select(&TABLE_ROW) {
            let cells = row_cells(row);
            let (Some(first), Some(second)) = (cells.first(), cells.get(1)) else {
                continue;
            };

            let description = element_text(*second);
            for target in anchor_targets(*first) {
                by_target.entry(target).or_insert_with(|| description.clone());
            }
        }
        Self { by_target }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.by_target.get(key).map(String::as_str)
    }
}

/// Anchor names a cell exposes: `id`/`name` attributes on the cell or any
/// descendant, plus in-page `href="#..."` links.
fn anchor_targets(cell: ElementRef<'_>) -> Vec<String> {
    let mut targets = Vec::new();
    let elements = std::iter::once(cell).chain(cell.select(&ANCHOR_TARGET));
    for element in elements {
        let value = element.value();
        targets.extend(value.attr("id").map(str::to_string));
        targets.extend(value.attr("name").map(str::to_string));
        if value.name() == "a" {
            if let Some(fragment) = value.attr("href").and_then(|href| href.strip_prefix('#')) {
                targets.push(fragment.to_string());
            }
        }
    }
    targets
}
