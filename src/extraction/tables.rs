//! Equipment table extraction
//!
//! Item tables on the reference site do not share a column order, so the
//! "Name" and "Level" columns are located by header text for every table.

use crate::error::{ExtractionError, Result};
use crate::items::Item;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

/// Header text of the item name column
pub const NAME_HEADER: &str = "Name";

/// Header text of the item level column
pub const LEVEL_HEADER: &str = "Level";

/// Positions of the columns needed to build an [`Item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Index of the name cell within a row's `td` cells
    pub name: usize,
    /// Index of the level cell within a row's `td` cells
    pub level: usize,
}

/// Table extraction functionality
pub struct TableExtractor;

impl TableExtractor {
    /// Extract every item from every usable table in `html`
    #[instrument(skip(html), fields(bytes = html.len()))]
    pub fn extract_items(html: &str) -> Result<Vec<Item>> {
        let document = Html::parse_document(html);
        let tables = selector("table")?;
        let headers = selector("th")?;
        let rows = selector("tr")?;
        let cells = selector("td")?;

        let mut items = Vec::new();
        for (index, table) in document.select(&tables).enumerate() {
            let Some(layout) = Self::locate_columns(table, &headers) else {
                debug!("Table {} has no Name/Level headers, skipping", index);
                continue;
            };

            for row in table.select(&rows) {
                let row_cells: Vec<ElementRef> = row.select(&cells).collect();
                if row_cells.is_empty() {
                    continue;
                }
                if let Some(item) = Self::parse_row(&row_cells, layout) {
                    items.push(item);
                }
            }
        }

        debug!("Extracted {} items", items.len());
        Ok(items)
    }

    /// Find the name and level columns of a table by their header text
    ///
    /// When a header repeats, the last occurrence wins.
    pub fn locate_columns(table: ElementRef, headers: &Selector) -> Option<ColumnLayout> {
        let titles: Vec<String> = table.select(headers).map(cell_text).collect();
        let name = titles.iter().rposition(|t| t == NAME_HEADER)?;
        let level = titles.iter().rposition(|t| t == LEVEL_HEADER)?;
        Some(ColumnLayout { name, level })
    }

    fn parse_row(cells: &[ElementRef], layout: ColumnLayout) -> Option<Item> {
        let name = cells.get(layout.name).map(|c| cell_text(*c))?;
        let level_text = cells.get(layout.level).map(|c| cell_text(*c))?;

        match level_text.parse::<i32>() {
            Ok(level) => Some(Item { name, level }),
            Err(_) => {
                debug!("Skipping {} as a possible item", name);
                None
            }
        }
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ExtractionError::InvalidSelector(format!("{}: {}", css, e)).into())
}

/// Visible text of a cell with whitespace runs collapsed
fn cell_text(cell: ElementRef) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_columns_any_order() {
        let html = Html::parse_fragment(
            "<table><tr><th>Price</th><th>Level</th><th>Name</th></tr></table>",
        );
        let table = html.select(&selector("table").unwrap()).next().unwrap();
        let layout = TableExtractor::locate_columns(table, &selector("th").unwrap());
        assert_eq!(layout, Some(ColumnLayout { name: 2, level: 1 }));
    }

    #[test]
    fn test_locate_columns_repeated_header() {
        let html = Html::parse_fragment(
            "<table><tr><th>Name</th><th>Level</th><th>Price</th><th>Level</th></tr></table>",
        );
        let table = html.select(&selector("table").unwrap()).next().unwrap();
        let layout = TableExtractor::locate_columns(table, &selector("th").unwrap());
        assert_eq!(layout, Some(ColumnLayout { name: 0, level: 3 }));
    }

    #[test]
    fn test_locate_columns_missing_level() {
        let html = Html::parse_fragment("<table><tr><th>Name</th><th>Bulk</th></tr></table>");
        let table = html.select(&selector("table").unwrap()).next().unwrap();
        assert!(TableExtractor::locate_columns(table, &selector("th").unwrap()).is_none());
    }

    #[test]
    fn test_cell_text_collapses_whitespace() {
        let html = Html::parse_fragment("<table><tr><td>\n  Flight   <b>suit</b>\n</td></tr></table>");
        let cell = html.select(&selector("td").unwrap()).next().unwrap();
        assert_eq!(cell_text(cell), "Flight suit");
    }

    #[test]
    fn test_unparsable_level_skipped() {
        let html = r#"
            <table>
              <tr><th>Name</th><th>Level</th></tr>
              <tr><td>Tactical knife</td><td>1</td></tr>
              <tr><td>Variable</td><td>varies</td></tr>
            </table>"#;
        let items = TableExtractor::extract_items(html).unwrap();
        assert_eq!(items, vec![Item::new("Tactical knife", 1)]);
    }
}
