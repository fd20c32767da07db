use contracts::domain::a001_warehouse::PriorityOrderer;
use leptos::prelude::*;

use crate::domain::a001_warehouse::api;
use crate::shared::icons::icon;

/// Warehouse priority page: ordered list with up/down controls and
/// drag-and-drop, persisted on explicit save.
#[component]
#[allow(non_snake_case)]
pub fn WarehouseOrderPage() -> impl IntoView {
    let orderer = RwSignal::new(PriorityOrderer::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (notice, set_notice) = signal::<Option<String>>(None);
    // Row currently hovered during a drag, for highlighting only.
    let (drag_target, set_drag_target) = signal::<Option<usize>>(None);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_warehouses().await {
                Ok(warehouses) => {
                    orderer.set(PriorityOrderer::from_fetched(warehouses));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_save = move || {
        if saving.get() {
            return;
        }
        set_saving.set(true);
        set_notice.set(None);
        let items = orderer.with(|o| o.items().to_vec());
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_order(&items).await {
                Ok(()) => {
                    set_error.set(None);
                    set_notice.set(Some("Order saved".to_string()));
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(2000).await;
                        set_notice.set(None);
                    });
                }
                // In-memory order stays as-is so the operator can retry.
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Warehouse priority"}</h1>
                    <p class="header__subtitle">
                        {"Drag rows or use the arrows to change the display order, then save."}
                    </p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| handle_save()
                        disabled=move || saving.get() || loading.get()
                    >
                        {icon("save")}
                        {move || if saving.get() { "Saving..." } else { "Save order" }}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| fetch()
                        disabled=move || saving.get()
                    >
                        {icon("refresh")}
                        {"Reload"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                    <button class="button button--smallall" on:click=move |_| fetch()>{"Retry"}</button>
                </div>
            })}

            {move || notice.get().map(|n| view! {
                <div class="notice-box">
                    {icon("check")}
                    <span>{n}</span>
                </div>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <div class="page__loading">{"Loading..."}</div> }>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell" style="width: 32px;"></th>
                                <th class="table__header-cell" style="width: 60px;">{"#"}</th>
                                <th class="table__header-cell">{"Name"}</th>
                                <th class="table__header-cell">{"Country"}</th>
                                <th class="table__header-cell">{"City"}</th>
                                <th class="table__header-cell">{"Active"}</th>
                                <th class="table__header-cell" style="width: 90px;">{"Move"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = orderer.with(|o| o.items().to_vec());
                                let last = rows.len().saturating_sub(1);
                                rows.into_iter().enumerate().map(|(index, row)| {
                                    let is_target = move || drag_target.get() == Some(index);
                                    view! {
                                        <tr
                                            class="table__row table__row--draggable"
                                            class:table__row--drop-target=is_target
                                            draggable="true"
                                            on:dragstart=move |ev: leptos::ev::DragEvent| {
                                                // Firefox needs data on the transfer to start a drag.
                                                if let Some(dt) = ev.data_transfer() {
                                                    let _ = dt.set_data("text/plain", &index.to_string());
                                                }
                                                orderer.update(|o| o.begin_drag(index));
                                            }
                                            on:dragover=move |ev: leptos::ev::DragEvent| {
                                                ev.prevent_default();
                                                set_drag_target.set(Some(index));
                                            }
                                            on:drop=move |ev: leptos::ev::DragEvent| {
                                                ev.prevent_default();
                                                set_drag_target.set(None);
                                                orderer.update(|o| { o.drop_on(index); });
                                            }
                                            on:dragend=move |_| {
                                                set_drag_target.set(None);
                                                orderer.update(|o| o.cancel_drag());
                                            }
                                        >
                                            <td class="table__cell table__cell--grip">{icon("grip")}</td>
                                            <td class="table__cell">{row.order}</td>
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell">{row.country}</td>
                                            <td class="table__cell">{row.city}</td>
                                            <td class="table__cell">
                                                {if row.is_active { "Active" } else { "Inactive" }}
                                            </td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--ghost button--smallall"
                                                    title="Move up"
                                                    disabled=index == 0
                                                    on:click=move |_| orderer.update(|o| o.move_up(index))
                                                >
                                                    {icon("arrow-up")}
                                                </button>
                                                <button
                                                    class="button button--ghost button--smallall"
                                                    title="Move down"
                                                    disabled=index == last
                                                    on:click=move |_| orderer.update(|o| o.move_down(index))
                                                >
                                                    {icon("arrow-down")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
