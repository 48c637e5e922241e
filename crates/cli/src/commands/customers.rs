//! Customer commands.

use backoffice_admin::AdminState;
use backoffice_admin::components::DataTableConfig;
use backoffice_admin::services::{CustomerBulkAction, bulk};
use backoffice_core::CustomerId;

/// Print one page of customers, optionally filtered by a server-side search.
///
/// # Errors
///
/// Returns error if the customers cannot be fetched.
pub async fn list(
    state: &AdminState,
    search: Option<&str>,
    page: usize,
    all_columns: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let customers = match search {
        Some(term) => state.api().search_customers(term).await?,
        None => state.api().list_customers().await?,
    };

    let table = state.customers_table();
    let page_size = table.page_size.max(1);
    let total_pages = customers.len().div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let columns = table.visible_columns(all_columns);
    let header: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
    tracing::info!("{}", header.join(" | "));

    if customers.is_empty() {
        tracing::info!("{}", table.empty_message);
    }
    for customer in customers.iter().skip((page - 1) * page_size).take(page_size) {
        tracing::info!(
            "#{:<6} {}",
            customer.id,
            DataTableConfig::render_row(customer, &columns).join(" | ")
        );
    }
    tracing::info!(
        "Page {} of {} ({} customers)",
        page,
        total_pages,
        customers.len()
    );
    Ok(())
}

/// Apply a bulk action to the given customers.
///
/// # Errors
///
/// Returns error for an unknown action, a destructive action without
/// `confirmed`, or when any customer could not be updated.
pub async fn apply_bulk(
    state: &AdminState,
    action: &str,
    ids: &[i64],
    confirmed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let action: CustomerBulkAction = action.parse()?;
    if action.is_destructive() && !confirmed {
        return Err(format!("`{action}` cannot be undone; pass --yes to confirm").into());
    }

    let ids: Vec<CustomerId> = ids.iter().copied().map(CustomerId::new).collect();
    let outcome = bulk::customers(state.api(), action, &ids).await;

    tracing::info!("{}: {} customer(s) done", action.label(), outcome.succeeded.len());
    for (id, e) in &outcome.failed {
        tracing::warn!("#{id}: {e}");
    }
    if outcome.is_complete() {
        Ok(())
    } else {
        Err(format!("{} customer(s) failed", outcome.failed.len()).into())
    }
}
