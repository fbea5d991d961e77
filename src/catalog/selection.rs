//! Category selection
//!
//! Turns the categories named on the command line into the set of categories
//! the walker will open. Naming a branch takes in everything beneath it;
//! naming a leaf takes in the branches above it so the walker can reach it.

use crate::catalog::CategoryNode;
use std::collections::BTreeSet;
use tracing::warn;

/// Set of active category keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    active: BTreeSet<String>,
}

impl Selection {
    /// Activate every category below `root`
    pub fn all(root: &CategoryNode) -> Self {
        Self {
            active: root
                .descendants()
                .into_iter()
                .map(|n| n.key.clone())
                .collect(),
        }
    }

    /// Resolve explicitly selected keys against the tree below `root`.
    ///
    /// A category is active when it, one of its ancestors, or one of its
    /// descendants is selected. Selecting nothing, or the root itself,
    /// activates everything.
    pub fn resolve<I, S>(root: &CategoryNode, explicit: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let explicit: BTreeSet<String> = explicit
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        if explicit.is_empty() || explicit.contains(&root.key) {
            return Self::all(root);
        }

        for key in &explicit {
            if root.find(key).is_none() {
                warn!("Category {} is not in the definition file", key);
            }
        }

        let mut active = BTreeSet::new();
        for child in &root.categories {
            mark(child, false, &explicit, &mut active);
        }
        Self { active }
    }

    /// Whether the category with this key will be visited
    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains(key)
    }

    /// Active keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    /// Number of active categories
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no category is active
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Returns whether `node` or anything below it is explicitly selected.
fn mark(
    node: &CategoryNode,
    ancestor_selected: bool,
    explicit: &BTreeSet<String>,
    active: &mut BTreeSet<String>,
) -> bool {
    let selected_here = explicit.contains(&node.key);
    let inherited = ancestor_selected || selected_here;

    let mut selected_below = false;
    for child in &node.categories {
        selected_below |= mark(child, inherited, explicit, active);
    }

    if inherited || selected_below {
        active.insert(node.key.clone());
    }
    selected_here || selected_below
}
