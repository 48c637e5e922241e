//! Order commands.

use backoffice_admin::AdminState;
use backoffice_admin::api::types::OrdersQuery;
use backoffice_admin::components::DataTableConfig;
use backoffice_admin::services::{OrderBulkAction, bulk};
use backoffice_core::{OrderId, OrderStatus};

/// Print one server-side page of orders.
///
/// # Errors
///
/// Returns error if the orders cannot be fetched.
pub async fn list(
    state: &AdminState,
    query: &OrdersQuery,
    all_columns: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = state.api().list_orders(query).await?;

    let table = state.orders_table();
    let columns = table.visible_columns(all_columns);
    let header: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
    tracing::info!("{}", header.join(" | "));

    if page.data.is_empty() {
        tracing::info!("{}", table.empty_message);
    }
    for order in &page.data {
        tracing::info!("{}", DataTableConfig::render_row(order, &columns).join(" | "));
    }
    tracing::info!("{} of {} orders", page.data.len(), page.total);
    Ok(())
}

/// Print today's and this month's order totals.
///
/// # Errors
///
/// Returns error if the stats cannot be fetched.
pub async fn stats(state: &AdminState) -> Result<(), Box<dyn std::error::Error>> {
    let stats = state.api().order_stats().await?;
    tracing::info!(
        "Today: {} orders, {} revenue",
        stats.today.count,
        stats.today.total.round_dp(2)
    );
    tracing::info!(
        "This month: {} orders, {} revenue",
        stats.month.count,
        stats.month.total.round_dp(2)
    );
    Ok(())
}

/// Change the status of an order.
///
/// # Errors
///
/// Returns error if the update fails.
pub async fn set_status(
    state: &AdminState,
    id: i64,
    status: OrderStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    state
        .api()
        .update_order_status(OrderId::new(id), status)
        .await?;
    tracing::info!("Order #{id} marked {}", status.label());
    Ok(())
}

/// Apply a bulk action to the given orders.
///
/// # Errors
///
/// Returns error for an unknown action, a destructive action without
/// `confirmed`, or when any order could not be updated.
pub async fn apply_bulk(
    state: &AdminState,
    action: &str,
    ids: &[i64],
    confirmed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let action: OrderBulkAction = action.parse()?;
    if action.is_destructive() && !confirmed {
        return Err(format!("`{action}` cannot be undone; pass --yes to confirm").into());
    }

    let ids: Vec<OrderId> = ids.iter().copied().map(OrderId::new).collect();
    let outcome = bulk::orders(state.api(), action, &ids).await;

    tracing::info!("{}: {} order(s) done", action.label(), outcome.succeeded.len());
    for (id, e) in &outcome.failed {
        tracing::warn!("#{id}: {e}");
    }
    if outcome.is_complete() {
        Ok(())
    } else {
        Err(format!("{} order(s) failed", outcome.failed.len()).into())
    }
}
