//! Category tree commands.

use backoffice_admin::AdminState;
use backoffice_admin::components::category_tree;
use backoffice_core::CategoryId;

/// Print the category tree in rendering order.
///
/// # Errors
///
/// Returns error if the categories cannot be fetched.
pub async fn tree(
    state: &AdminState,
    selected: Option<i64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let categories = state.api().list_categories().await?;
    let tree = category_tree::build(&categories, selected.map(CategoryId::new));

    for node in &tree.nodes {
        let marker = if node.selected { "*" } else { " " };
        let menu = if node.category.show_in_menu { " [menu]" } else { "" };
        let indent = node.depth * 2;
        tracing::info!(
            "{marker} {:indent$}{} (#{}){menu}",
            "",
            node.category.name,
            node.category.id
        );
    }

    let report = &tree.report;
    tracing::info!(
        "{} categories shown, {} left out",
        tree.nodes.len(),
        report.dropped()
    );
    if !report.orphans.is_empty() {
        tracing::warn!(ids = ?report.orphans, "Categories with a missing parent");
    }
    if !report.unreachable.is_empty() {
        tracing::warn!(ids = ?report.unreachable, "Categories unreachable from a root");
    }
    if !report.truncated.is_empty() {
        tracing::warn!(ids = ?report.truncated, "Categories nested too deep");
    }
    for mismatch in &report.level_mismatches {
        tracing::warn!(
            id = %mismatch.id,
            stored = mismatch.stored,
            computed = mismatch.computed,
            "Stored level differs from tree depth"
        );
    }
    Ok(())
}

/// Show or hide a category in the storefront menu.
///
/// # Errors
///
/// Returns error if the update fails.
pub async fn set_menu(
    state: &AdminState,
    id: i64,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = state
        .api()
        .set_category_show_in_menu(CategoryId::new(id), show)
        .await?;
    tracing::info!(
        "{} is now {} the menu",
        category.name,
        if category.show_in_menu { "in" } else { "out of" }
    );
    Ok(())
}
