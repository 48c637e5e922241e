//! Products grid and bulk commands.

use backoffice_admin::AdminState;
use backoffice_admin::components::grid::ProductSortKey;
use backoffice_admin::components::{DataTableConfig, GridAction};
use backoffice_admin::services::{ProductBulkAction, bulk};
use backoffice_core::ProductId;

const SORT_KEYS: [ProductSortKey; 4] = [
    ProductSortKey::Id,
    ProductSortKey::Name,
    ProductSortKey::Sku,
    ProductSortKey::Price,
];

/// Print one page of the products grid.
///
/// `sort` is a column key of the products table; only sortable columns are
/// accepted.
///
/// # Errors
///
/// Returns error if the column cannot be sorted or the products cannot be
/// fetched.
pub async fn list(
    state: &AdminState,
    search: Option<String>,
    sort: &str,
    desc: bool,
    page: usize,
    all_columns: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = state.products_table();
    let sort_key = SORT_KEYS
        .into_iter()
        .find(|k| k.as_str() == sort)
        .filter(|k| table.is_sortable(k.as_str()))
        .ok_or_else(|| format!("column `{sort}` is not sortable"))?;

    let products = state.api().list_products().await?;

    let mut grid = state.product_grid();
    if let Some(term) = search {
        grid = grid.apply(&products, GridAction::Search(term));
    }
    grid = grid.apply(&products, GridAction::SortBy(sort_key));
    if desc {
        grid = grid.apply(&products, GridAction::SortBy(sort_key));
    }
    grid = grid.apply(&products, GridAction::GoToPage(page));

    let view = grid.view(&products);
    let columns = table.visible_columns(all_columns);
    let header: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
    tracing::info!("{}", header.join(" | "));

    if view.rows.is_empty() {
        tracing::info!("{}", table.empty_message);
    }
    for product in &view.rows {
        tracing::info!("{}", DataTableConfig::render_row(*product, &columns).join(" | "));
    }
    tracing::info!(
        "Page {} of {} ({} matching products)",
        view.page,
        view.total_pages,
        view.total_matches
    );
    Ok(())
}

/// Apply a bulk action to the given products.
///
/// # Errors
///
/// Returns error for an unknown action, a destructive action without
/// `confirmed`, or when any product could not be updated.
pub async fn apply_bulk(
    state: &AdminState,
    action: &str,
    ids: &[i64],
    confirmed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let action: ProductBulkAction = action.parse()?;
    if action.is_destructive() && !confirmed {
        return Err(format!("`{action}` cannot be undone; pass --yes to confirm").into());
    }

    let ids: Vec<ProductId> = ids.iter().copied().map(ProductId::new).collect();
    let outcome = bulk::products(state.api(), action, &ids).await;

    tracing::info!("{}: {} product(s) done", action.label(), outcome.succeeded.len());
    for (id, e) in &outcome.failed {
        tracing::warn!("#{id}: {e}");
    }
    if outcome.is_complete() {
        Ok(())
    } else {
        Err(format!("{} product(s) failed", outcome.failed.len()).into())
    }
}
