use contracts::domain::a001_warehouse::Warehouse;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_inventory_count::{CountSheet, CountStatus, CountType, FilterTab};
use leptos::prelude::*;

use crate::domain::a001_warehouse::api as warehouse_api;
use crate::domain::a003_inventory_count::api;

fn default_session_name() -> String {
    // chrono::Utc::now() needs the wasmbind feature; the JS clock is enough here.
    let iso = js_sys::Date::new_0().to_iso_string();
    let iso = iso.as_string().unwrap_or_default();
    format!("Inventory count {}", iso.get(..10).unwrap_or(""))
}

/// ViewModel for the inventory count page.
///
/// All derivations live in `contracts` (`CountSheet`); this type only
/// wires the sheet to signals and network calls.
#[derive(Clone, Copy)]
pub struct CountPageViewModel {
    pub warehouses: RwSignal<Vec<Warehouse>>,
    pub warehouse_id: RwSignal<String>,
    pub count_type: RwSignal<CountType>,
    pub products: RwSignal<Vec<Product>>,
    pub sheet: RwSignal<Option<CountSheet>>,
    pub name: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub bulk_value: RwSignal<String>,
    pub tab: RwSignal<FilterTab>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub show_picker: RwSignal<bool>,
}

impl CountPageViewModel {
    pub fn new() -> Self {
        Self {
            warehouses: RwSignal::new(Vec::new()),
            warehouse_id: RwSignal::new(String::new()),
            count_type: RwSignal::new(CountType::Full),
            products: RwSignal::new(Vec::new()),
            sheet: RwSignal::new(None),
            name: RwSignal::new(default_session_name()),
            notes: RwSignal::new(String::new()),
            bulk_value: RwSignal::new(String::new()),
            tab: RwSignal::new(FilterTab::All),
            loading: RwSignal::new(false),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            show_picker: RwSignal::new(false),
        }
    }

    pub fn load_warehouses(&self) {
        let warehouses = self.warehouses;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match warehouse_api::fetch_warehouses().await {
                Ok(list) => warehouses.set(list),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    /// Switch the warehouse under count. Resets all counted-quantity state
    /// and fetches the product list.
    pub fn select_warehouse(&self, id: String) {
        self.warehouse_id.set(id.clone());
        self.sheet.set(None);
        self.products.set(Vec::new());
        self.tab.set(FilterTab::All);
        self.bulk_value.set(String::new());
        if id.is_empty() {
            return;
        }

        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_warehouse_products(&id).await {
                Ok(products) => {
                    this.sheet
                        .set(Some(CountSheet::new(this.count_type.get_untracked(), products.clone())));
                    this.products.set(products);
                    this.error.set(None);
                }
                // Count entry stays blocked until the fetch succeeds.
                Err(e) => this.error.set(Some(e)),
            }
            this.loading.set(false);
        });
    }

    /// Switch between full and partial mode. Rebuilds the sheet, which
    /// drops entered counts and the partial selection.
    pub fn set_count_type(&self, count_type: CountType) {
        self.count_type.set(count_type);
        self.tab.set(FilterTab::All);
        let products = self.products.get_untracked();
        if !products.is_empty() || self.sheet.with_untracked(|s| s.is_some()) {
            self.sheet.set(Some(CountSheet::new(count_type, products)));
        }
    }

    /// Parse and upsert one counted-quantity cell. An empty field counts
    /// as 0; non-numeric input is ignored and the cell keeps its value.
    pub fn update_count(&self, product_id: &str, raw: &str) {
        let value = if raw.trim().is_empty() {
            Some(0)
        } else {
            raw.trim().parse::<i64>().ok()
        };
        if let Some(value) = value {
            let product_id = product_id.to_string();
            self.sheet.update(|sheet| {
                if let Some(sheet) = sheet.as_mut() {
                    sheet.set_counted(&product_id, value);
                }
            });
        }
    }

    pub fn apply_bulk(&self) {
        let raw = self.bulk_value.get_untracked();
        let value = raw.trim().parse::<i64>().ok();
        self.sheet.update(|sheet| {
            if let Some(sheet) = sheet.as_mut() {
                sheet.apply_bulk(value);
            }
        });
    }

    pub fn toggle_selection(&self, product_id: &str) {
        let product_id = product_id.to_string();
        self.sheet.update(|sheet| {
            if let Some(sheet) = sheet.as_mut() {
                sheet.toggle_selection(&product_id);
            }
        });
    }

    /// Submit the session. A completed submission resets the working
    /// state; a draft keeps it; a failure keeps every entered count.
    pub fn submit(&self, status: CountStatus, created_by: Option<String>) {
        if self.submitting.get_untracked() {
            return;
        }
        let Some(sheet) = self.sheet.get_untracked() else {
            self.error.set(Some("Select a warehouse before submitting the count".to_string()));
            return;
        };

        let request = match sheet.build_submission(
            &self.warehouse_id.get_untracked(),
            &self.name.get_untracked(),
            &self.notes.get_untracked(),
            created_by,
            status,
        ) {
            Ok(request) => request,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let this = *self;
        this.submitting.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::submit_count(&request).await {
                Ok(()) => {
                    let label = match status {
                        CountStatus::Completed => "Count submitted",
                        CountStatus::Draft => "Draft saved",
                    };
                    this.notice.set(Some(label.to_string()));
                    if status == CountStatus::Completed {
                        this.reset_after_completion();
                    }
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(2500).await;
                        this.notice.set(None);
                    });
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.submitting.set(false);
        });
    }

    fn reset_after_completion(&self) {
        self.name.set(default_session_name());
        self.notes.set(String::new());
        self.bulk_value.set(String::new());
        self.tab.set(FilterTab::All);
        let count_type = self.count_type.get_untracked();
        let products = self.products.get_untracked();
        self.sheet.set(Some(CountSheet::new(count_type, products)));
    }
}
