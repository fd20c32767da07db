use contracts::domain::a003_inventory_count::{CountStatus, CountType, FilterTab};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use super::product_picker::ProductPicker;
use super::view_model::CountPageViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;

/// Formats a money value with a thousands separator and two decimals.
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer: String = result.chars().rev().collect();
    format!("{}.{}", formatted_integer, decimal_part)
}

fn tab_count(
    tab: FilterTab,
    totals: contracts::domain::a003_inventory_count::CountTotals,
) -> usize {
    match tab {
        FilterTab::All => totals.total,
        FilterTab::Counted => totals.counted,
        FilterTab::Uncounted => totals.total - totals.counted,
        FilterTab::Matched => totals.matched,
        FilterTab::Mismatched => totals.mismatched,
    }
}

/// Inventory count page: pick a warehouse, enter counted quantities, review
/// discrepancies, submit a draft or a completed session.
#[component]
#[allow(non_snake_case)]
pub fn CountPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = CountPageViewModel::new();
    vm.load_warehouses();

    let totals = Signal::derive(move || {
        vm.sheet
            .with(|sheet| sheet.as_ref().map(|s| s.totals()).unwrap_or_default())
    });
    let rows = Signal::derive(move || {
        let tab = vm.tab.get();
        vm.sheet
            .with(|sheet| sheet.as_ref().map(|s| s.rows(tab)).unwrap_or_default())
    });
    let total_shortage = Signal::derive(move || {
        vm.sheet
            .with(|sheet| sheet.as_ref().map(|s| s.total_shortage_cost()).unwrap_or(0.0))
    });
    let has_sheet = move || vm.sheet.with(|s| s.is_some());
    let is_partial = move || vm.count_type.get() == CountType::Partial;
    let operator = move || ctx.session.get_untracked().operator;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Inventory count"}</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || !has_sheet() || vm.submitting.get())
                        on_click=move |_| vm.submit(CountStatus::Draft, operator())
                    >
                        {"Save draft"}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !has_sheet() || vm.submitting.get())
                        on_click=move |_| vm.submit(CountStatus::Completed, operator())
                    >
                        {move || if vm.submitting.get() { "Submitting..." } else { "Complete count" }}
                    </Button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            {move || vm.notice.get().map(|n| view! {
                <div class="notice-box">
                    {icon("check")}
                    <span>{n}</span>
                </div>
            })}

            <div class="details-form details-form--inline">
                <div class="form-group">
                    <label for="count-warehouse">{"Warehouse"}</label>
                    <select
                        id="count-warehouse"
                        prop:value=move || vm.warehouse_id.get()
                        on:change=move |ev| vm.select_warehouse(event_target_value(&ev))
                    >
                        <option value="">{"Select a warehouse..."}</option>
                        {move || vm.warehouses.get().into_iter().map(|w| {
                            view! {
                                <option value={w.id.clone()}>
                                    {format!("{} ({})", w.name, w.city)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Count type"}</label>
                    <div class="radio-row">
                        <label>
                            <input
                                type="radio"
                                name="count-type"
                                prop:checked=move || vm.count_type.get() == CountType::Full
                                on:change=move |_| vm.set_count_type(CountType::Full)
                            />
                            {"Full (all products)"}
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="count-type"
                                prop:checked=is_partial
                                on:change=move |_| vm.set_count_type(CountType::Partial)
                            />
                            {"Partial (selected products)"}
                        </label>
                    </div>
                </div>

                <div class="form-group">
                    <label for="count-name">{"Name"}</label>
                    <input
                        type="text"
                        id="count-name"
                        prop:value=move || vm.name.get()
                        on:input=move |ev| vm.name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="count-notes">{"Notes"}</label>
                    <textarea
                        id="count-notes"
                        prop:value=move || vm.notes.get()
                        on:input=move |ev| vm.notes.set(event_target_value(&ev))
                    ></textarea>
                </div>
            </div>

            <Show when=move || vm.loading.get()>
                <div class="page__loading">{"Loading products..."}</div>
            </Show>

            <Show when=move || has_sheet() && !vm.loading.get()>
                <div class="count-toolbar">
                    <div class="count-toolbar__bulk">
                        <input
                            type="number"
                            min="0"
                            placeholder="Counted quantity"
                            prop:value=move || vm.bulk_value.get()
                            on:input=move |ev| vm.bulk_value.set(event_target_value(&ev))
                        />
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.apply_bulk()
                        >
                            {"Apply to all"}
                        </Button>
                    </div>
                    <Show when=is_partial>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.show_picker.set(true)
                        >
                            {icon("plus")}
                            {"Add products"}
                        </Button>
                    </Show>
                </div>

                <div class="count-tabs">
                    {FilterTab::ALL.into_iter().map(|tab| {
                        view! {
                            <button
                                class="count-tabs__tab"
                                class=("count-tabs__tab--active", move || vm.tab.get() == tab)
                                on:click=move |_| vm.tab.set(tab)
                            >
                                {tab.label()}
                                <span class="count-tabs__badge">
                                    {move || tab_count(tab, totals.get())}
                                </span>
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Product"}</th>
                                <th class="table__header-cell">{"SKU"}</th>
                                <th class="table__header-cell table__header-cell--num">{"Expected"}</th>
                                <th class="table__header-cell table__header-cell--num">{"After reservation"}</th>
                                <th class="table__header-cell table__header-cell--num">{"Counted"}</th>
                                <th class="table__header-cell table__header-cell--num">{"Net"}</th>
                                <th class="table__header-cell table__header-cell--num">{"Shortage"}</th>
                                <th class="table__header-cell table__header-cell--num">{"Shortage cost"}</th>
                                <th class="table__header-cell">{"Status"}</th>
                                <Show when=is_partial>
                                    <th class="table__header-cell"></th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows.get().into_iter().map(|row| {
                                let id_for_input = row.product_id.clone();
                                let id_for_remove = row.product_id.clone();
                                let status = if row.counted_quantity == 0 {
                                    ("—", "")
                                } else if row.is_matched {
                                    ("Matched", "badge--success")
                                } else {
                                    ("Mismatched", "badge--error")
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.name.clone()}</td>
                                        <td class="table__cell">{row.sku.clone()}</td>
                                        <td class="table__cell table__cell--num">{row.expected_before_reservation}</td>
                                        <td class="table__cell table__cell--num">{row.expected_after_reservation}</td>
                                        <td class="table__cell table__cell--num">
                                            <input
                                                type="number"
                                                min="0"
                                                class="count-input"
                                                prop:value=row.counted_quantity.to_string()
                                                on:change=move |ev| {
                                                    vm.update_count(&id_for_input, &event_target_value(&ev));
                                                }
                                            />
                                        </td>
                                        <td class="table__cell table__cell--num">{row.net_inventory}</td>
                                        <td class="table__cell table__cell--num">{row.shortage}</td>
                                        <td class="table__cell table__cell--num">{format_money(row.shortage_cost)}</td>
                                        <td class="table__cell">
                                            <span class={format!("badge {}", status.1)}>{status.0}</span>
                                        </td>
                                        <Show when=is_partial>
                                            {
                                                let id = id_for_remove.clone();
                                                view! {
                                                    <td class="table__cell">
                                                        <button
                                                            class="button button--ghost button--smallall"
                                                            title="Remove from count"
                                                            on:click=move |_| vm.toggle_selection(&id)
                                                        >
                                                            {icon("x")}
                                                        </button>
                                                    </td>
                                                }
                                            }
                                        </Show>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="count-summary">
                    <span>{move || {
                        let t = totals.get();
                        format!(
                            "{} products, {} counted, {} matched, {} mismatched",
                            t.total, t.counted, t.matched, t.mismatched
                        )
                    }}</span>
                    <span class="count-summary__cost">
                        {move || format!("Total shortage cost: {}", format_money(total_shortage.get()))}
                    </span>
                </div>
            </Show>

            <Show when=move || vm.show_picker.get()>
                <ProductPicker vm=vm />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_money;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.891), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
    }
}
