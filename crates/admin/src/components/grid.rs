//! Client-side grid engine.
//!
//! Search, sort, pagination and row selection over an array that was fetched
//! once from the API. All state lives in [`GridState`]; every user
//! interaction is a [`GridAction`] fed through [`GridState::apply`], and the
//! rows to draw come from [`GridState::view`]. Nothing here can fail.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use backoffice_core::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

use crate::api::types::{Order, Product};

/// A row type the grid can search, sort and select.
pub trait GridRow {
    /// Identity used for selection.
    type Id: Copy + Eq + Hash + fmt::Debug;
    /// Columns the grid can sort by.
    type SortKey: Copy + Eq + fmt::Debug;

    /// Row identity.
    fn row_id(&self) -> Self::Id;

    /// Whether the row matches an already lowercased, non-empty search term.
    fn matches(&self, term: &str) -> bool;

    /// Ascending comparison by `key`.
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Header checkbox state over the visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

/// A user interaction with a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction<K, Id> {
    /// Replace the search term; always returns to page 1.
    Search(String),
    /// Column header click: toggle direction on the active column, or switch
    /// to a new column ascending.
    SortBy(K),
    /// Jump to a 1-based page; out-of-range pages clamp.
    GoToPage(usize),
    NextPage,
    PrevPage,
    ToggleRow(Id),
    /// Header checkbox: deselect the visible rows if all are selected,
    /// otherwise select all of them.
    ToggleVisible,
    ClearSelection,
}

/// Ephemeral view state of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState<K, Id: Eq + Hash> {
    search: String,
    sort_key: K,
    sort_order: SortOrder,
    page: usize,
    page_size: usize,
    selected: HashSet<Id>,
}

/// One rendered page of a grid.
#[derive(Debug)]
pub struct GridView<'a, R> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a R>,
    /// Current 1-based page (1 when there are no matches).
    pub page: usize,
    /// Number of pages (0 when there are no matches).
    pub total_pages: usize,
    /// Rows matching the search, across all pages.
    pub total_matches: usize,
    /// Header checkbox state for `rows`.
    pub selection: SelectionState,
}

impl<K, Id> GridState<K, Id>
where
    K: Copy + Eq,
    Id: Copy + Eq + Hash,
{
    /// Fresh state: no search, page 1, sorted ascending by `sort_key`.
    ///
    /// A page size of zero is treated as one.
    #[must_use]
    pub fn new(sort_key: K, page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort_key,
            sort_order: SortOrder::Asc,
            page: 1,
            page_size: page_size.max(1),
            selected: HashSet::new(),
        }
    }

    /// Start with a specific sort direction.
    #[must_use]
    pub const fn with_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn sort(&self) -> (K, SortOrder) {
        (self.sort_key, self.sort_order)
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selected row ids, across all pages.
    #[must_use]
    pub const fn selected(&self) -> &HashSet<Id> {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: Id) -> bool {
        self.selected.contains(&id)
    }

    /// Apply one interaction and return the next state.
    #[must_use]
    pub fn apply<R>(mut self, rows: &[R], action: GridAction<K, Id>) -> Self
    where
        R: GridRow<Id = Id, SortKey = K>,
    {
        match action {
            GridAction::Search(term) => {
                self.search = term;
                self.page = 1;
            }
            GridAction::SortBy(key) => {
                if key == self.sort_key {
                    self.sort_order = self.sort_order.toggled();
                } else {
                    self.sort_key = key;
                    self.sort_order = SortOrder::Asc;
                }
            }
            GridAction::GoToPage(page) => {
                self.page = self.clamp_page(page, self.matching(rows).len());
            }
            GridAction::NextPage => {
                self.page = self.clamp_page(self.page.saturating_add(1), self.matching(rows).len());
            }
            GridAction::PrevPage => {
                self.page = self.clamp_page(self.page.saturating_sub(1), self.matching(rows).len());
            }
            GridAction::ToggleRow(id) => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
            }
            GridAction::ToggleVisible => {
                let visible: Vec<Id> = self.view(rows).rows.iter().map(|r| r.row_id()).collect();
                let all_selected =
                    !visible.is_empty() && visible.iter().all(|id| self.selected.contains(id));
                if all_selected {
                    for id in &visible {
                        self.selected.remove(id);
                    }
                } else {
                    self.selected.extend(visible);
                }
            }
            GridAction::ClearSelection => self.selected.clear(),
        }
        self
    }

    /// Filter, sort and paginate `rows` for display.
    #[must_use]
    pub fn view<'a, R>(&self, rows: &'a [R]) -> GridView<'a, R>
    where
        R: GridRow<Id = Id, SortKey = K>,
    {
        let mut matching = self.matching(rows);
        let key = self.sort_key;
        match self.sort_order {
            SortOrder::Asc => matching.sort_by(|a, b| a.compare_by(b, key)),
            SortOrder::Desc => matching.sort_by(|a, b| b.compare_by(a, key)),
        }

        let total_matches = matching.len();
        let total_pages = total_matches.div_ceil(self.page_size);
        let page = self.clamp_page(self.page, total_matches);
        let rows: Vec<&R> = matching
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .collect();

        let selected_visible = rows
            .iter()
            .filter(|r| self.selected.contains(&r.row_id()))
            .count();
        let selection = match selected_visible {
            0 => SelectionState::None,
            n if n == rows.len() => SelectionState::All,
            _ => SelectionState::Some,
        };

        GridView {
            rows,
            page,
            total_pages,
            total_matches,
            selection,
        }
    }

    fn matching<'a, R>(&self, rows: &'a [R]) -> Vec<&'a R>
    where
        R: GridRow<Id = Id, SortKey = K>,
    {
        let term = self.search.to_lowercase();
        if term.is_empty() {
            return rows.iter().collect();
        }
        rows.iter().filter(|r| r.matches(&term)).collect()
    }

    fn clamp_page(&self, page: usize, total_matches: usize) -> usize {
        let last = total_matches.div_ceil(self.page_size).max(1);
        page.clamp(1, last)
    }
}

// =============================================================================
// Products grid
// =============================================================================

/// Sortable columns of the products grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSortKey {
    Id,
    Name,
    Sku,
    Price,
}

impl ProductSortKey {
    /// Column key used by the products table configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Sku => "sku",
            Self::Price => "price",
        }
    }
}

/// Products grid state.
pub type ProductGrid = GridState<ProductSortKey, ProductId>;

impl ProductGrid {
    /// Products grid sorted by id, ascending.
    #[must_use]
    pub fn products(page_size: usize) -> Self {
        Self::new(ProductSortKey::Id, page_size)
    }
}

impl GridRow for Product {
    type Id = ProductId;
    type SortKey = ProductSortKey;

    fn row_id(&self) -> ProductId {
        self.id
    }

    fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self
                .sku
                .as_deref()
                .is_some_and(|sku| sku.to_lowercase().contains(term))
    }

    fn compare_by(&self, other: &Self, key: ProductSortKey) -> Ordering {
        match key {
            ProductSortKey::Id => self.id.cmp(&other.id),
            ProductSortKey::Name => self.name.cmp(&other.name),
            ProductSortKey::Sku => self.sku.cmp(&other.sku),
            ProductSortKey::Price => self.first_price().amount.cmp(&other.first_price().amount),
        }
    }
}

// =============================================================================
// Orders grid
// =============================================================================

/// Sortable columns of the orders grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSortKey {
    Id,
    Customer,
    Total,
    Date,
}

impl OrderSortKey {
    /// Column key used by the orders table configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Customer => "customer",
            Self::Total => "total",
            Self::Date => "date",
        }
    }
}

/// Orders grid state.
pub type OrderGrid = GridState<OrderSortKey, OrderId>;

impl OrderGrid {
    /// Orders grid with the newest orders first.
    #[must_use]
    pub fn orders(page_size: usize) -> Self {
        Self::new(OrderSortKey::Date, page_size).with_order(SortOrder::Desc)
    }
}

impl GridRow for Order {
    type Id = OrderId;
    type SortKey = OrderSortKey;

    fn row_id(&self) -> OrderId {
        self.id
    }

    fn matches(&self, term: &str) -> bool {
        self.customer.full_name.to_lowercase().contains(term)
    }

    fn compare_by(&self, other: &Self, key: OrderSortKey) -> Ordering {
        match key {
            OrderSortKey::Id => self.id.cmp(&other.id),
            OrderSortKey::Customer => self.customer.full_name.cmp(&other.customer.full_name),
            OrderSortKey::Total => self.total_amount.cmp(&other.total_amount),
            OrderSortKey::Date => self.order_date.cmp(&other.order_date),
        }
    }
}
