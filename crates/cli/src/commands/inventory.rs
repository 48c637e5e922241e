//! Inventory command.

use backoffice_admin::AdminState;
use backoffice_admin::services::inventory;

/// Print products with their current price and stock.
///
/// # Errors
///
/// Returns error if products, prices or stock cannot be fetched.
pub async fn show(
    state: &AdminState,
    search: Option<&str>,
    low_stock_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = inventory::load(state.api()).await?;
    let summary = inventory::summarize(&rows);

    let shown = inventory::search(&rows, search.unwrap_or_default())
        .into_iter()
        .filter(|row| !low_stock_only || row.is_low_stock());

    for row in shown {
        let price = row
            .price
            .map_or_else(|| "-".to_string(), |p| p.amount.round_dp(2).to_string());
        let stock = row
            .stock
            .map_or_else(|| "-".to_string(), |s| s.quantity.to_string());
        tracing::info!(
            "#{:<6} {:<40} {:<16} {:>10} {:>6}{}",
            row.product_id,
            row.name,
            row.sku.as_deref().unwrap_or("-"),
            price,
            stock,
            if row.is_low_stock() { "  LOW" } else { "" }
        );
    }

    tracing::info!(
        "{} products, {} priced, {} stocked, {} low on stock",
        summary.total,
        summary.with_price,
        summary.with_stock,
        summary.low_stock
    );
    Ok(())
}
