//! Category tree traversal
//!
//! Opens the equipment page, then every active category beneath it in file
//! order, extracting items from each leaf page reached.

use crate::catalog::{CategoryNode, Definitions, Selection};
use crate::error::Result;
use crate::extraction::TableExtractor;
use crate::items::Item;
use crate::source::PageSource;
use tracing::{debug, info, instrument};

/// Walks the active part of a category tree through a [`PageSource`]
pub struct CategoryWalker<'a> {
    definitions: &'a Definitions,
    selection: &'a Selection,
}

impl<'a> CategoryWalker<'a> {
    /// Create a walker over `definitions` restricted to `selection`
    pub fn new(definitions: &'a Definitions, selection: &'a Selection) -> Self {
        Self {
            definitions,
            selection,
        }
    }

    /// Visit every active page and collect the items on its leaf pages.
    ///
    /// Stops at the first navigation failure.
    #[instrument(skip(self, source))]
    pub async fn walk<S: PageSource>(&self, source: &mut S) -> Result<Vec<Item>> {
        source.start(&self.definitions.main_page.url).await?;

        let mut items = Vec::new();
        let mut stack: Vec<&CategoryNode> = vec![&self.definitions.equipment_page];

        while let Some(node) = stack.pop() {
            debug!("Opening category {}", node.key);
            source
                .open(&node.link_text, &node.url, &node.child_link_texts())
                .await?;

            if node.is_leaf() {
                let html = source.html().await?;
                let found = TableExtractor::extract_items(&html)?;
                info!("{}: {} items", node.key, found.len());
                items.extend(found);
            } else {
                stack.extend(
                    node.categories
                        .iter()
                        .rev()
                        .filter(|child| self.selection.is_active(&child.key)),
                );
            }
        }

        Ok(items)
    }
}
