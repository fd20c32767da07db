use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use super::view_model::CountPageViewModel;

/// Partial-mode product selector. Toggling a checkbox adds the product to
/// the count scope (seeded with 0) or removes it together with its
/// entered count.
#[component]
#[allow(non_snake_case)]
pub fn ProductPicker(vm: CountPageViewModel) -> impl IntoView {
    let filter = RwSignal::new(String::new());

    let filtered = Signal::derive(move || {
        let needle = filter.get().trim().to_lowercase();
        vm.products
            .get()
            .into_iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.sku.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    });
    let selected_count = Signal::derive(move || {
        vm.sheet.with(|sheet| {
            sheet
                .as_ref()
                .map(|s| {
                    vm.products
                        .with(|products| products.iter().filter(|p| s.is_selected(&p.id)).count())
                })
                .unwrap_or(0)
        })
    });

    view! {
        <div class="modal-overlay" on:click=move |_| vm.show_picker.set(false)>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{"Select products"}</h2>
                    <button
                        class="button button--ghost button--smallall"
                        title="Close"
                        on:click=move |_| vm.show_picker.set(false)
                    >
                        {"✕"}
                    </button>
                </div>

                <div class="modal__toolbar">
                    <input
                        type="text"
                        class="modal__search"
                        placeholder="Filter by name or SKU..."
                        prop:value=move || filter.get()
                        on:input=move |ev| filter.set(event_target_value(&ev))
                    />
                    <span class="modal__counter">
                        {move || format!("{} selected", selected_count.get())}
                    </span>
                </div>

                <div class="modal__body">
                    {move || filtered.get().into_iter().map(|product| {
                        let id = product.id.clone();
                        let id_for_checked = product.id.clone();
                        let is_checked = move || {
                            vm.sheet.with(|sheet| {
                                sheet
                                    .as_ref()
                                    .map(|s| s.is_selected(&id_for_checked))
                                    .unwrap_or(false)
                            })
                        };
                        view! {
                            <label class="modal__row">
                                <input
                                    type="checkbox"
                                    prop:checked=is_checked
                                    on:change=move |_| vm.toggle_selection(&id)
                                />
                                <span class="modal__row-name">{product.name.clone()}</span>
                                <span class="modal__row-sku">{product.sku.clone()}</span>
                                <span class="modal__row-qty">
                                    {format!("{} on hand", product.quantity)}
                                </span>
                            </label>
                        }
                    }).collect_view()}
                </div>

                <div class="modal__footer">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.show_picker.set(false)
                    >
                        {"Done"}
                    </Button>
                </div>
            </div>
        </div>
    }
}
