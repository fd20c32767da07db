//! Inventory count reconciliation.
//!
//! `CountSheet` holds the working state of one count session before
//! submission: the warehouse's product list, the operator-entered counted
//! quantities, and (in partial mode) the selected product subset. Every
//! derived figure is a pure function of
//! `(quantity, reserved_quantity, cost_price, counted_quantity)` and is
//! recomputed on access, never stored.

use std::collections::HashMap;

use super::aggregate::{
    CountStatus, CountType, CreateInventoryCountRequest, InventoryCountItem,
};
use crate::domain::a002_product::Product;

/// Review-table filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterTab {
    #[default]
    All,
    Counted,
    Uncounted,
    Matched,
    Mismatched,
}

impl FilterTab {
    pub const ALL: [FilterTab; 5] = [
        FilterTab::All,
        FilterTab::Counted,
        FilterTab::Uncounted,
        FilterTab::Matched,
        FilterTab::Mismatched,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterTab::All => "All",
            FilterTab::Counted => "Counted",
            FilterTab::Uncounted => "Uncounted",
            FilterTab::Matched => "Matched",
            FilterTab::Mismatched => "Mismatched",
        }
    }

    fn matches(&self, row: &CountRow) -> bool {
        match self {
            FilterTab::All => true,
            FilterTab::Counted => row.counted_quantity > 0,
            FilterTab::Uncounted => row.counted_quantity == 0,
            // Matched requires an actual count, otherwise a zero-stock row
            // that was never touched would register as matched and break
            // matched + mismatched == counted.
            FilterTab::Matched => row.counted_quantity > 0 && row.is_matched,
            FilterTab::Mismatched => row.counted_quantity > 0 && !row.is_matched,
        }
    }
}

/// One review-table line with all derived figures.
#[derive(Debug, Clone, PartialEq)]
pub struct CountRow {
    pub product_id: String,
    pub name: String,
    pub sku: String,
    pub counted_quantity: i64,
    /// counted - reserved; may be negative.
    pub net_inventory: i64,
    /// Backend on-hand quantity at count time.
    pub expected_before_reservation: i64,
    /// quantity - reserved.
    pub expected_after_reservation: i64,
    /// max(0, expected_after_reservation - counted).
    pub shortage: i64,
    /// shortage valued at cost price, never negative.
    pub shortage_cost: f64,
    /// counted == quantity (pure equality, regardless of whether the row
    /// was ever counted).
    pub is_matched: bool,
}

/// Aggregate counters driving the filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountTotals {
    pub total: usize,
    pub counted: usize,
    pub matched: usize,
    pub mismatched: usize,
}

/// Working state of one count session.
#[derive(Debug, Clone)]
pub struct CountSheet {
    count_type: CountType,
    products: Vec<Product>,
    counts: HashMap<String, i64>,
    /// Partial-mode selection, in the order products were added.
    selected: Vec<String>,
}

impl CountSheet {
    /// Start a sheet for a freshly fetched product list. Full mode seeds
    /// every product with a counted quantity of 0; partial mode starts
    /// with an empty selection.
    pub fn new(count_type: CountType, products: Vec<Product>) -> Self {
        let mut counts = HashMap::new();
        if count_type == CountType::Full {
            for product in &products {
                counts.insert(product.id.clone(), 0);
            }
        }
        Self {
            count_type,
            products,
            counts,
            selected: Vec::new(),
        }
    }

    pub fn count_type(&self) -> CountType {
        self.count_type
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_selected(&self, product_id: &str) -> bool {
        self.selected.iter().any(|id| id == product_id)
    }

    pub fn counted(&self, product_id: &str) -> i64 {
        self.counts.get(product_id).copied().unwrap_or(0)
    }

    /// Upsert the counted quantity for a product. Negative input is
    /// clamped to zero (the backend only accepts non-negative counts).
    pub fn set_counted(&mut self, product_id: &str, value: i64) {
        if !self.in_scope(product_id) {
            return;
        }
        self.counts.insert(product_id.to_string(), value.max(0));
    }

    /// Set every in-scope product's counted quantity to `value`.
    /// `None` is a no-op.
    pub fn apply_bulk(&mut self, value: Option<i64>) {
        let Some(value) = value else { return };
        let value = value.max(0);
        let ids: Vec<String> = self.scope_ids();
        for id in ids {
            self.counts.insert(id, value);
        }
    }

    /// Partial mode only: add the product to the working set with a count
    /// of 0, or remove it (and its entered count) if already present.
    pub fn toggle_selection(&mut self, product_id: &str) {
        if self.count_type != CountType::Partial {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|id| id == product_id) {
            self.selected.remove(pos);
            self.counts.remove(product_id);
        } else if self.products.iter().any(|p| p.id == product_id) {
            self.selected.push(product_id.to_string());
            self.counts.insert(product_id.to_string(), 0);
        }
    }

    /// Rows of the current scope after applying a filter tab.
    pub fn rows(&self, tab: FilterTab) -> Vec<CountRow> {
        self.scope_products()
            .map(|p| self.row_for(p))
            .filter(|row| tab.matches(row))
            .collect()
    }

    /// Recomputed aggregate counters for the current scope.
    pub fn totals(&self) -> CountTotals {
        let mut totals = CountTotals::default();
        for product in self.scope_products() {
            let row = self.row_for(product);
            totals.total += 1;
            if row.counted_quantity > 0 {
                totals.counted += 1;
                if row.is_matched {
                    totals.matched += 1;
                } else {
                    totals.mismatched += 1;
                }
            }
        }
        totals
    }

    /// Sum of shortage cost over the current scope.
    pub fn total_shortage_cost(&self) -> f64 {
        self.scope_products()
            .map(|p| self.row_for(p).shortage_cost)
            .sum()
    }

    /// Build the `POST /inventory-counts` body. Full mode maps over every
    /// product (untouched counts default to 0); partial mode requires a
    /// non-empty selection.
    pub fn build_submission(
        &self,
        warehouse_id: &str,
        name: &str,
        notes: &str,
        created_by: Option<String>,
        status: CountStatus,
    ) -> Result<CreateInventoryCountRequest, String> {
        if warehouse_id.trim().is_empty() {
            return Err("Select a warehouse before submitting the count".to_string());
        }
        if self.count_type == CountType::Partial && self.selected.is_empty() {
            return Err("Select at least one product for a partial count".to_string());
        }
        let items: Vec<InventoryCountItem> = self
            .scope_products()
            .map(|p| InventoryCountItem {
                product_id: p.id.clone(),
                counted_quantity: self.counted(&p.id),
            })
            .collect();
        Ok(CreateInventoryCountRequest {
            warehouse: warehouse_id.to_string(),
            name: name.trim().to_string(),
            count_type: self.count_type,
            notes: notes.to_string(),
            items,
            selected_products: self.selected.clone(),
            created_by,
            status,
        })
    }

    fn row_for(&self, product: &Product) -> CountRow {
        let counted = self.counted(&product.id);
        let expected_after = product.quantity - product.reserved_quantity;
        let shortage = (expected_after - counted).max(0);
        CountRow {
            product_id: product.id.clone(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            counted_quantity: counted,
            net_inventory: counted - product.reserved_quantity,
            expected_before_reservation: product.quantity,
            expected_after_reservation: expected_after,
            shortage,
            shortage_cost: (shortage as f64 * product.cost_price).max(0.0),
            is_matched: counted == product.quantity,
        }
    }

    fn in_scope(&self, product_id: &str) -> bool {
        match self.count_type {
            CountType::Full => self.products.iter().any(|p| p.id == product_id),
            CountType::Partial => self.is_selected(product_id),
        }
    }

    fn scope_products(&self) -> impl Iterator<Item = &Product> {
        let by_id: HashMap<&str, &Product> = match self.count_type {
            CountType::Full => HashMap::new(),
            CountType::Partial => self
                .products
                .iter()
                .map(|p| (p.id.as_str(), p))
                .collect(),
        };
        let ordered: Vec<&Product> = match self.count_type {
            CountType::Full => self.products.iter().collect(),
            CountType::Partial => self
                .selected
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).copied())
                .collect(),
        };
        ordered.into_iter()
    }

    fn scope_ids(&self) -> Vec<String> {
        self.scope_products().map(|p| p.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, quantity: i64, reserved: i64, cost: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            sku: format!("SKU-{id}"),
            quantity,
            reserved_quantity: reserved,
            cost_price: cost,
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            product("p1", 50, 10, 4.0),
            product("p2", 20, 0, 2.5),
            product("p3", 0, 0, 9.9),
        ]
    }

    #[test]
    fn derived_fields_for_partial_count() {
        let mut sheet = CountSheet::new(CountType::Full, vec![product("p1", 50, 10, 4.0)]);
        sheet.set_counted("p1", 30);
        let row = &sheet.rows(FilterTab::All)[0];
        assert_eq!(row.net_inventory, 20);
        assert_eq!(row.expected_before_reservation, 50);
        assert_eq!(row.expected_after_reservation, 40);
        assert_eq!(row.shortage, 10);
        assert_eq!(row.shortage_cost, 40.0);
        assert!(!row.is_matched);
    }

    #[test]
    fn exact_count_matches_with_no_shortage() {
        let mut sheet = CountSheet::new(CountType::Full, vec![product("p1", 50, 10, 4.0)]);
        sheet.set_counted("p1", 50);
        let row = &sheet.rows(FilterTab::All)[0];
        assert!(row.is_matched);
        assert_eq!(row.shortage, 0);
        assert_eq!(row.shortage_cost, 0.0);
        assert_eq!(row.net_inventory, 40);
    }

    #[test]
    fn overage_never_produces_negative_shortage() {
        let mut sheet = CountSheet::new(CountType::Full, vec![product("p1", 10, 2, 3.0)]);
        sheet.set_counted("p1", 25);
        let row = &sheet.rows(FilterTab::All)[0];
        assert_eq!(row.shortage, 0);
        assert_eq!(row.shortage_cost, 0.0);
        assert_eq!(row.net_inventory, 23);
    }

    #[test]
    fn full_mode_seeds_every_product_with_zero() {
        let sheet = CountSheet::new(CountType::Full, sample_products());
        let totals = sheet.totals();
        assert_eq!(totals.total, 3);
        assert_eq!(totals.counted, 0);
        assert_eq!(sheet.rows(FilterTab::Uncounted).len(), 3);
    }

    #[test]
    fn partial_mode_scope_is_the_selection() {
        let mut sheet = CountSheet::new(CountType::Partial, sample_products());
        assert_eq!(sheet.totals().total, 0);
        sheet.toggle_selection("p2");
        sheet.toggle_selection("p1");
        assert_eq!(sheet.totals().total, 2);
        // scope keeps selection order
        let rows = sheet.rows(FilterTab::All);
        assert_eq!(rows[0].product_id, "p2");
        assert_eq!(rows[1].product_id, "p1");
        // removal drops the entered count as well
        sheet.set_counted("p2", 7);
        sheet.toggle_selection("p2");
        sheet.toggle_selection("p2");
        assert_eq!(sheet.counted("p2"), 0);
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        let mut sheet = CountSheet::new(CountType::Full, sample_products());
        sheet.set_counted("p1", -5);
        assert_eq!(sheet.counted("p1"), 0);
        sheet.apply_bulk(Some(-3));
        assert_eq!(sheet.rows(FilterTab::Counted).len(), 0);
    }

    #[test]
    fn out_of_scope_counts_are_ignored() {
        let mut sheet = CountSheet::new(CountType::Partial, sample_products());
        sheet.set_counted("p1", 10);
        assert_eq!(sheet.counted("p1"), 0);
        let mut full = CountSheet::new(CountType::Full, sample_products());
        full.set_counted("unknown", 10);
        assert_eq!(full.totals().counted, 0);
    }

    #[test]
    fn bulk_apply_covers_scope_and_recomputes_aggregates() {
        let mut sheet = CountSheet::new(CountType::Full, sample_products());
        sheet.apply_bulk(Some(25));
        for row in sheet.rows(FilterTab::All) {
            assert_eq!(row.counted_quantity, 25);
        }
        let totals = sheet.totals();
        assert_eq!(totals.counted, 3);
        assert_eq!(totals.matched, 0);
        assert_eq!(totals.mismatched, 3);
        // None is a no-op
        let before = sheet.totals();
        sheet.apply_bulk(None);
        assert_eq!(sheet.totals(), before);
    }

    #[test]
    fn aggregate_counters_stay_consistent() {
        let mut sheet = CountSheet::new(CountType::Full, sample_products());
        sheet.set_counted("p1", 50); // matched
        sheet.set_counted("p2", 3); // mismatched
        let totals = sheet.totals();
        assert_eq!(totals.matched + totals.mismatched, totals.counted);
        assert!(totals.counted <= totals.total);
        assert_eq!(totals.matched, 1);
        assert_eq!(totals.mismatched, 1);
    }

    #[test]
    fn zero_stock_uncounted_row_is_not_matched_for_totals() {
        // p3 has quantity 0 and was never counted: equality holds but it
        // must not inflate the matched counter.
        let sheet = CountSheet::new(CountType::Full, sample_products());
        let totals = sheet.totals();
        assert_eq!(totals.matched, 0);
        assert!(sheet.rows(FilterTab::Matched).is_empty());
        assert_eq!(sheet.rows(FilterTab::Uncounted).len(), 3);
    }

    #[test]
    fn filter_tabs_partition_correctly() {
        let mut sheet = CountSheet::new(CountType::Full, sample_products());
        sheet.set_counted("p1", 50); // matched
        sheet.set_counted("p2", 7); // mismatched
        let mismatched = sheet.rows(FilterTab::Mismatched);
        assert_eq!(mismatched.len(), 1);
        assert_eq!(mismatched[0].product_id, "p2");
        let uncounted = sheet.rows(FilterTab::Uncounted);
        assert_eq!(uncounted.len(), 1);
        assert_eq!(uncounted[0].product_id, "p3");
        assert_eq!(sheet.rows(FilterTab::Counted).len(), 2);
        assert_eq!(sheet.rows(FilterTab::All).len(), 3);
    }

    #[test]
    fn submission_requires_warehouse_and_selection() {
        let sheet = CountSheet::new(CountType::Partial, sample_products());
        assert!(sheet
            .build_submission("", "June count", "", None, CountStatus::Draft)
            .is_err());
        assert!(sheet
            .build_submission("w1", "June count", "", None, CountStatus::Draft)
            .is_err());
    }

    #[test]
    fn full_submission_includes_untouched_products_as_zero() {
        let mut sheet = CountSheet::new(CountType::Full, sample_products());
        sheet.set_counted("p2", 20);
        let request = sheet
            .build_submission("w1", " June count ", "notes", Some("admin".into()), CountStatus::Completed)
            .unwrap();
        assert_eq!(request.items.len(), 3);
        assert_eq!(request.name, "June count");
        let p1 = request.items.iter().find(|i| i.product_id == "p1").unwrap();
        assert_eq!(p1.counted_quantity, 0);
        let p2 = request.items.iter().find(|i| i.product_id == "p2").unwrap();
        assert_eq!(p2.counted_quantity, 20);
        assert_eq!(request.status, CountStatus::Completed);
    }

    #[test]
    fn partial_submission_carries_selection() {
        let mut sheet = CountSheet::new(CountType::Partial, sample_products());
        sheet.toggle_selection("p3");
        sheet.set_counted("p3", 4);
        let request = sheet
            .build_submission("w1", "Spot check", "", None, CountStatus::Draft)
            .unwrap();
        assert_eq!(request.selected_products, vec!["p3".to_string()]);
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].counted_quantity, 4);
    }
}
