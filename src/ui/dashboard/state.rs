//! Dashboard state management
//!
//! The view model behind the dashboard screen: the cached product
//! collection, the single error slot, the per-mutation busy flags and the
//! form/filter inputs. Derived statistics and the filtered view are pure
//! functions of the collection, recomputed on every render and never cached.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::product::{Category, NewProduct, Product};

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;
use strum::IntoEnumIterator;

/// Fields of the add-product form, in focus order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FormField {
    Name,
    Category,
    Price,
    Threshold,
    Quantity,
}

/// Which control currently receives keyboard input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Focus {
    Search,
    CategoryFilter,
    LowStockToggle,
    Form(FormField),
    Products,
}

impl Focus {
    /// Focus ring: filter bar, then the form, then the product table.
    const ORDER: [Focus; 9] = [
        Focus::Search,
        Focus::CategoryFilter,
        Focus::LowStockToggle,
        Focus::Form(FormField::Name),
        Focus::Form(FormField::Category),
        Focus::Form(FormField::Price),
        Focus::Form(FormField::Threshold),
        Focus::Form(FormField::Quantity),
        Focus::Products,
    ];

    pub fn next(self) -> Focus {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Raw add-product form input. Numeric fields are kept as entered text and
/// coerced once, on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub product_name: String,
    pub category: Option<Category>,
    pub price: String,
    pub threshold: String,
    pub quantity: String,
}

impl ProductForm {
    /// Validates presence of all five fields and coerces the numeric ones.
    /// No further validation; the server has the final word.
    pub fn parse(&self) -> Result<NewProduct, String> {
        let name = self.product_name.trim();
        if name.is_empty()
            || self.price.trim().is_empty()
            || self.threshold.trim().is_empty()
            || self.quantity.trim().is_empty()
        {
            return Err("All fields are required".to_string());
        }
        let Some(category) = self.category else {
            return Err("All fields are required".to_string());
        };
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| "Price must be a number".to_string())?;
        let threshold = self
            .threshold
            .trim()
            .parse::<u32>()
            .map_err(|_| "Threshold must be a non-negative integer".to_string())?;
        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| "Initial stock must be a non-negative integer".to_string())?;

        Ok(NewProduct {
            product_name: name.to_string(),
            category,
            price,
            threshold,
            quantity,
        })
    }

    pub fn clear(&mut self) {
        *self = ProductForm::default();
    }

    /// Cycle the category selection: None -> Grocery -> ... -> Household -> None.
    pub fn cycle_category(&mut self, forward: bool) {
        self.category = cycle_category(self.category, forward);
    }
}

/// The three independent, conjunctive product filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_term: String,
    pub category: Option<Category>,
    pub low_stock_only: bool,
}

impl FilterState {
    /// All active filters must match (AND).
    pub fn matches(&self, product: &Product) -> bool {
        let search_ok = product
            .product_name
            .to_lowercase()
            .contains(&self.search_term.to_lowercase());
        let category_ok = match self.category {
            Some(category) => product.category == category,
            None => true,
        };
        let stock_ok = !self.low_stock_only || product.is_low_stock();
        search_ok && category_ok && stock_ok
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.category = cycle_category(self.category, forward);
    }
}

fn cycle_category(current: Option<Category>, forward: bool) -> Option<Category> {
    let mut ring: Vec<Option<Category>> = std::iter::once(None)
        .chain(Category::iter().map(Some))
        .collect();
    if !forward {
        ring.reverse();
    }
    let i = ring.iter().position(|c| *c == current).unwrap_or(0);
    ring[(i + 1) % ring.len()]
}

/// Dashboard view model. Mutated only by applying worker events (see
/// `updaters.rs`) and by local input editing.
#[derive(Debug)]
pub struct DashboardState {
    /// Display name of the signed-in user, if known.
    pub username: Option<String>,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,

    /// The full product collection. Replaced wholesale on every successful
    /// refresh, never merged or patched.
    pub products: Vec<Product>,
    /// The single error slot. A new error overwrites the previous one.
    pub error: Option<String>,
    /// Busy flag for the add-product form.
    pub adding_product: bool,
    /// Product IDs with a stock update in flight. Each disables only its own
    /// control.
    updating: HashSet<String>,

    pub form: ProductForm,
    pub filters: FilterState,
    pub focus: Focus,
    /// Selection index into the filtered view.
    pub selected: usize,
    /// Pending add-stock amount per product ID.
    add_amounts: HashMap<String, u32>,

    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(username: Option<String>, environment: Environment, start_time: Instant) -> Self {
        Self {
            username,
            environment,
            start_time,
            products: Vec::new(),
            error: None,
            adding_product: false,
            updating: HashSet::new(),
            form: ProductForm::default(),
            filters: FilterState::default(),
            focus: Focus::Products,
            selected: 0,
            add_amounts: HashMap::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    // --- Derived statistics (over the full, unfiltered collection) ---

    pub fn total_products(&self) -> usize {
        self.products.len()
    }

    pub fn total_stock(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }

    pub fn low_stock_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_low_stock()).count()
    }

    // --- Derived filtered view ---

    pub fn filtered_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| self.filters.matches(p))
            .collect()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.filtered_products().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.filtered_products().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection valid after the collection or filters change.
    pub fn clamp_selection(&mut self) {
        let len = self.filtered_products().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    // --- Per-product add-stock input ---

    pub fn add_amount(&self, product_id: &str) -> u32 {
        self.add_amounts.get(product_id).copied().unwrap_or(0)
    }

    pub(crate) fn reset_add_amount(&mut self, product_id: &str) {
        self.add_amounts.insert(product_id.to_string(), 0);
    }

    /// Adjust the pending add amount for the selected product, clamped to
    /// `[0, max_addable]`. Submission additionally requires a value >= 1.
    pub fn adjust_selected_add_amount(&mut self, delta: i64) {
        let Some(product) = self.selected_product() else {
            return;
        };
        let id = product.product_id.clone();
        let max = i64::from(product.max_addable());
        let current = i64::from(self.add_amount(&id));
        let adjusted = (current + delta).clamp(0, max);
        self.add_amounts.insert(id, adjusted as u32);
    }

    // --- Busy flags ---

    pub fn is_updating(&self, product_id: &str) -> bool {
        self.updating.contains(product_id)
    }

    pub(crate) fn set_updating(&mut self, product_id: &str, busy: bool) {
        if busy {
            self.updating.insert(product_id.to_string());
        } else {
            self.updating.remove(product_id);
        }
    }

    // --- Event intake (queue + bounded activity log) ---

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
