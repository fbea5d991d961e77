//! Category definition file
//!
//! The definition file is a JSON document describing how to reach every
//! equipment table on the site:
//!
//! ```json
//! {
//!   "main_page": { "url": "https://www.aonsrd.com/" },
//!   "equipment_page": {
//!     "link_text": "Equipment",
//!     "url": "https://www.aonsrd.com/Equipment.aspx",
//!     "categories": {
//!       "armor": {
//!         "link_text": "Armor",
//!         "url": "https://www.aonsrd.com/Armor.aspx",
//!         "categories": { "light_armor": { "link_text": "Light Armor", "url": "..." } }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Category maps keep the order they have in the file; that order is the
//! order pages are visited in.

use crate::browser::UrlValidator;
use crate::error::{DefinitionError, Result};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, instrument};

/// Default location of the definition file, relative to the working directory
pub const DEFAULT_DEFINITIONS_PATH: &str = "config/equipment_definitions.json";

/// Key given to the equipment page, which has no key in the file
pub const EQUIPMENT_PAGE_KEY: &str = "equipment_page";

/// Entry page loaded directly by URL
#[derive(Debug, Clone, Deserialize)]
pub struct MainPage {
    /// URL of the site's landing page
    pub url: String,
}

/// A node in the site's navigation hierarchy
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryNode {
    /// Key of this node in its parent's category map
    #[serde(skip)]
    pub key: String,
    /// Visible text of the link leading to this page
    pub link_text: String,
    /// URL the link is expected to lead to
    pub url: String,
    /// Sub-categories, in file order. Empty for pages holding item tables.
    #[serde(default, deserialize_with = "ordered_categories")]
    pub categories: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Whether this page holds item tables rather than further categories
    pub fn is_leaf(&self) -> bool {
        self.categories.is_empty()
    }

    /// Link texts of the direct children
    pub fn child_link_texts(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.link_text.as_str()).collect()
    }

    /// Every node below this one, in pre-order
    pub fn descendants(&self) -> Vec<&CategoryNode> {
        let mut out = Vec::new();
        let mut stack: Vec<&CategoryNode> = self.categories.iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.categories.iter().rev());
        }
        out
    }

    /// Find a node below this one by key
    pub fn find(&self, key: &str) -> Option<&CategoryNode> {
        self.descendants().into_iter().find(|n| n.key == key)
    }
}

/// Parsed definition file
#[derive(Debug, Clone, Deserialize)]
pub struct Definitions {
    /// Landing page
    pub main_page: MainPage,
    /// Root of the category tree; always visited
    pub equipment_page: CategoryNode,
}

impl Definitions {
    /// Load and validate a definition file
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let definitions = Self::from_json(&raw)?;
        debug!(
            "Loaded {} categories from {}",
            definitions.equipment_page.descendants().len(),
            path.display()
        );
        Ok(definitions)
    }

    /// Parse and validate definitions from a JSON string
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut definitions: Definitions = serde_json::from_str(raw)?;
        definitions.equipment_page.key = EQUIPMENT_PAGE_KEY.to_string();
        definitions.validate()?;
        Ok(definitions)
    }

    /// Check that every URL in the file is navigable
    pub fn validate(&self) -> Result<()> {
        let check = |key: &str, url: &str| {
            UrlValidator::validate(url).map_err(|reason| DefinitionError::InvalidUrl {
                key: key.to_string(),
                reason,
            })
        };

        check("main_page", &self.main_page.url)?;
        check(&self.equipment_page.key, &self.equipment_page.url)?;
        for node in self.equipment_page.descendants() {
            check(&node.key, &node.url)?;
        }
        Ok(())
    }

    /// Keys of every category, in pre-order
    pub fn category_keys(&self) -> Vec<&str> {
        self.equipment_page
            .descendants()
            .into_iter()
            .map(|n| n.key.as_str())
            .collect()
    }

    /// Indented listing of the category tree
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<(usize, &CategoryNode)> = self
            .equipment_page
            .categories
            .iter()
            .rev()
            .map(|n| (0, n))
            .collect();

        while let Some((depth, node)) = stack.pop() {
            out.push_str(&format!(
                "{}{} \"{}\" {}\n",
                "  ".repeat(depth),
                node.key,
                node.link_text,
                node.url
            ));
            stack.extend(node.categories.iter().rev().map(|c| (depth + 1, c)));
        }
        out
    }
}

fn ordered_categories<'de, D>(deserializer: D) -> std::result::Result<Vec<CategoryNode>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CategoryMapVisitor;

    impl<'de> Visitor<'de> for CategoryMapVisitor {
        type Value = Vec<CategoryNode>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of category keys to categories")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut nodes: Vec<CategoryNode> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, mut node)) = map.next_entry::<String, CategoryNode>()? {
                if nodes.iter().any(|n| n.key == key) {
                    return Err(de::Error::custom(DefinitionError::DuplicateKey(key)));
                }
                node.key = key;
                nodes.push(node);
            }
            Ok(nodes)
        }
    }

    deserializer.deserialize_map(CategoryMapVisitor)
}
