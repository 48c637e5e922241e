//! Back office CLI - browse the store's catalogue and orders from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Category tree, indented, with orphan/cycle report
//! bo-cli categories tree
//!
//! # Products grid: search, sort and page client side
//! bo-cli products list --search shirt --sort price --desc --page 2
//! bo-cli products bulk deactivate 3 4 5
//!
//! # Orders: server-side paging and filters, or today's/month's totals
//! bo-cli orders list --status paid --from 2025-01-01 --to 2025-01-31
//! bo-cli orders stats
//! bo-cli orders bulk mark_shipped 10 11
//!
//! # Customers; destructive bulk actions need --yes
//! bo-cli customers list --search maria
//! bo-cli customers bulk delete 7 --yes
//!
//! # Inventory with latest prices and stock
//! bo-cli inventory --low-stock
//!
//! # Theme preference
//! bo-cli theme toggle
//! ```
//!
//! # Environment Variables
//!
//! See `backoffice_admin::config`. Set `BACKOFFICE_LOG_JSON` for JSON logs
//! and `RUST_LOG` to change verbosity.

#![cfg_attr(not(test), forbid(unsafe_code))]

use backoffice_admin::{AdminConfig, AdminState};
use backoffice_core::OrderStatus;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "bo-cli")]
#[command(author, version, about = "Back office CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Product catalogue
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Customers
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Products with their current price and stock
    Inventory {
        /// Filter by name or SKU
        #[arg(short, long)]
        search: Option<String>,

        /// Only show products with low stock
        #[arg(long)]
        low_stock: bool,
    },
    /// Light/dark theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// Print the category tree
    Tree {
        /// Highlight this category
        #[arg(long)]
        selected: Option<i64>,
    },
    /// Show or hide a category in the storefront menu
    Menu {
        id: i64,

        /// `true` to show, `false` to hide
        #[arg(action = clap::ArgAction::Set)]
        show: bool,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products one page at a time
    List {
        #[arg(short, long)]
        search: Option<String>,

        /// Sortable column key: id, name, sku or price
        #[arg(long, default_value = "id")]
        sort: String,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Also show columns hidden by default
        #[arg(long)]
        all_columns: bool,
    },
    /// Apply activate, deactivate or delete to several products
    Bulk(BulkArgs),
}

#[derive(clap::Args)]
struct BulkArgs {
    /// Action key
    action: String,

    #[arg(required = true)]
    ids: Vec<i64>,

    /// Confirm a destructive action
    #[arg(long)]
    yes: bool,
}

#[derive(Subcommand)]
enum CustomerAction {
    /// List customers one page at a time
    List {
        /// Name, CPF or email
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Also show columns hidden by default
        #[arg(long)]
        all_columns: bool,
    },
    /// Apply delete to several customers
    Bulk(BulkArgs),
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders (paged by the server)
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Page size (defaults to the configured orders page size)
        #[arg(short, long)]
        limit: Option<u32>,

        /// Customer name
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        status: Option<OrderStatus>,

        /// First day, `YYYY-MM-DD`
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day, `YYYY-MM-DD`
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Also show columns hidden by default
        #[arg(long)]
        all_columns: bool,
    },
    /// Order count and revenue for today and this month
    Stats,
    /// Change the status of an order
    SetStatus { id: i64, status: OrderStatus },
    /// Apply mark_shipped or delete to several orders
    Bulk(BulkArgs),
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the saved theme
    Show,
    /// Switch between light and dark
    Toggle,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "backoffice_admin=info,backoffice_cli=info".into());

    let json = std::env::var("BACKOFFICE_LOG_JSON").is_ok();
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let state = AdminState::new(config)?;

    match cli.command {
        Commands::Categories { action } => match action {
            CategoryAction::Tree { selected } => {
                commands::categories::tree(&state, selected).await?;
            }
            CategoryAction::Menu { id, show } => {
                commands::categories::set_menu(&state, id, show).await?;
            }
        },
        Commands::Products { action } => match action {
            ProductAction::List {
                search,
                sort,
                desc,
                page,
                all_columns,
            } => {
                commands::products::list(&state, search, &sort, desc, page, all_columns).await?;
            }
            ProductAction::Bulk(args) => {
                commands::products::apply_bulk(&state, &args.action, &args.ids, args.yes).await?;
            }
        },
        Commands::Orders { action } => match action {
            OrderAction::List {
                page,
                limit,
                search,
                status,
                from,
                to,
                all_columns,
            } => {
                let query = backoffice_admin::api::types::OrdersQuery {
                    page: Some(page),
                    limit: Some(limit.unwrap_or_else(|| {
                        u32::try_from(state.config().grid.orders_page_size).unwrap_or(u32::MAX)
                    })),
                    search,
                    status,
                    start_date: from,
                    end_date: to,
                };
                commands::orders::list(&state, &query, all_columns).await?;
            }
            OrderAction::Stats => commands::orders::stats(&state).await?,
            OrderAction::SetStatus { id, status } => {
                commands::orders::set_status(&state, id, status).await?;
            }
            OrderAction::Bulk(args) => {
                commands::orders::apply_bulk(&state, &args.action, &args.ids, args.yes).await?;
            }
        },
        Commands::Customers { action } => match action {
            CustomerAction::List {
                search,
                page,
                all_columns,
            } => {
                commands::customers::list(&state, search.as_deref(), page, all_columns).await?;
            }
            CustomerAction::Bulk(args) => {
                commands::customers::apply_bulk(&state, &args.action, &args.ids, args.yes).await?;
            }
        },
        Commands::Inventory { search, low_stock } => {
            commands::inventory::show(&state, search.as_deref(), low_stock).await?;
        }
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(&state)?,
            ThemeAction::Toggle => commands::theme::toggle(&state)?,
        },
    }
    Ok(())
}
