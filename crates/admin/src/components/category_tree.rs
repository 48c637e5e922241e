//! Category tree builder.
//!
//! Turns the flat `/categories` list into depth-first rendering order:
//! roots first in array order, each category immediately followed by its
//! descendants, children in the order they appear in the source array.
//!
//! Input the backend should never produce is dropped rather than rendered,
//! and every drop is listed in the [`TreeReport`]:
//!
//! - categories whose parent id is not in the list (orphans)
//! - categories that no root leads to, such as members of a parent cycle
//! - categories deeper than the depth guard
//!
//! The stored `level` is not trusted for layout; depth is computed from the
//! parent chain and disagreements are reported.

use std::collections::{HashMap, HashSet};

use backoffice_core::CategoryId;
use tracing::warn;

use crate::api::types::Category;

/// Deepest level rendered by [`build`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

const INDENT_STEP_PX: usize = 16;
const INDENT_BASE_PX: usize = 12;

/// A category placed in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode<'a> {
    pub category: &'a Category,
    /// Hops to the root (roots are 0).
    pub depth: usize,
    pub has_children: bool,
    pub selected: bool,
}

impl TreeNode<'_> {
    /// Left indent of the row in pixels.
    #[must_use]
    pub const fn indent_px(&self) -> usize {
        self.depth * INDENT_STEP_PX + INDENT_BASE_PX
    }
}

/// Stored level that disagrees with the computed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelMismatch {
    pub id: CategoryId,
    pub stored: u32,
    pub computed: usize,
}

/// What the builder dropped or flagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeReport {
    pub orphans: Vec<CategoryId>,
    pub unreachable: Vec<CategoryId>,
    pub truncated: Vec<CategoryId>,
    pub level_mismatches: Vec<LevelMismatch>,
}

impl TreeReport {
    /// Whether every category was rendered at its stored level.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty()
            && self.unreachable.is_empty()
            && self.truncated.is_empty()
            && self.level_mismatches.is_empty()
    }

    /// Number of categories left out of the tree.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.orphans.len() + self.unreachable.len() + self.truncated.len()
    }
}

/// Rendering order plus build report.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree<'a> {
    pub nodes: Vec<TreeNode<'a>>,
    pub report: TreeReport,
}

impl<'a> CategoryTree<'a> {
    /// Direct children of `parent` in rendering order.
    pub fn children_of(&self, parent: CategoryId) -> impl Iterator<Item = &TreeNode<'a>> {
        self.nodes
            .iter()
            .filter(move |n| n.category.parent_id() == Some(parent))
    }

    /// Root nodes in rendering order.
    pub fn roots(&self) -> impl Iterator<Item = &TreeNode<'a>> {
        self.nodes.iter().filter(|n| n.depth == 0)
    }
}

/// Build the tree with the default depth guard.
#[must_use]
pub fn build(categories: &[Category], selected: Option<CategoryId>) -> CategoryTree<'_> {
    build_with_max_depth(categories, selected, DEFAULT_MAX_DEPTH)
}

/// Build the tree, rendering nodes down to `max_depth` (roots are depth 0).
#[must_use]
pub fn build_with_max_depth(
    categories: &[Category],
    selected: Option<CategoryId>,
    max_depth: usize,
) -> CategoryTree<'_> {
    let known: HashSet<CategoryId> = categories.iter().map(|c| c.id).collect();
    let mut children: HashMap<CategoryId, Vec<&Category>> = HashMap::new();
    let mut roots = Vec::new();
    let mut report = TreeReport::default();

    for category in categories {
        match category.parent_id() {
            None => roots.push(category),
            Some(parent) if known.contains(&parent) => {
                children.entry(parent).or_default().push(category);
            }
            Some(parent) => {
                warn!(category_id = %category.id, parent_id = %parent, "dropping orphan category");
                report.orphans.push(category.id);
            }
        }
    }

    let mut nodes = Vec::with_capacity(categories.len());
    let mut stack: Vec<(&Category, usize)> = roots.iter().rev().map(|c| (*c, 0)).collect();

    // Cycles are unreachable from a root, so this walk terminates.
    while let Some((category, depth)) = stack.pop() {
        let kids = children.get(&category.id).map_or(&[][..], Vec::as_slice);
        stack.extend(kids.iter().rev().map(|c| (*c, depth + 1)));

        if depth > max_depth {
            report.truncated.push(category.id);
            continue;
        }

        if usize::try_from(category.level).ok() != Some(depth) {
            report.level_mismatches.push(LevelMismatch {
                id: category.id,
                stored: category.level,
                computed: depth,
            });
        }

        nodes.push(TreeNode {
            category,
            depth,
            has_children: !kids.is_empty(),
            selected: selected == Some(category.id),
        });
    }

    if !report.truncated.is_empty() {
        warn!(count = report.truncated.len(), max_depth, "category tree truncated");
    }

    let placed: HashSet<CategoryId> = nodes
        .iter()
        .map(|n| n.category.id)
        .chain(report.orphans.iter().copied())
        .chain(report.truncated.iter().copied())
        .collect();
    report.unreachable = categories
        .iter()
        .map(|c| c.id)
        .filter(|id| !placed.contains(id))
        .collect();
    if !report.unreachable.is_empty() {
        warn!(ids = ?report.unreachable, "categories unreachable from any root");
    }

    CategoryTree { nodes, report }
}
