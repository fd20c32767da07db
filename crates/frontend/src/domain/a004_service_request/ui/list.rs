use contracts::domain::a004_service_request::{
    ListQuery, RequestKind, RequestStatus, ServiceRequest, SortField, WorkflowConfig,
};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::domain::a004_service_request::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use crate::shared::components::pagination_controls::PaginationControls;

fn status_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "badge badge--pending",
        RequestStatus::Completed | RequestStatus::Approved => "badge badge--success",
        RequestStatus::Rejected => "badge badge--error",
    }
}

/// Generic request list page. One component serves all four request
/// kinds; the workflow configuration decides which status buttons a
/// pending row gets.
#[component]
#[allow(non_snake_case)]
pub fn RequestListPage(kind: RequestKind) -> impl IntoView {
    let config = WorkflowConfig::for_kind(kind);
    let items = RwSignal::new(Vec::<ServiceRequest>::new());
    let query = RwSignal::new(ListQuery::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    // Request currently being patched; its buttons are disabled.
    let (busy_id, set_busy_id) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_requests(kind).await {
                Ok(list) => {
                    items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let page = Signal::derive(move || items.with(|list| query.with(|q| q.apply(list))));

    let toggle_sort = move |field: SortField| {
        query.update(|q| {
            if q.sort_field == field {
                q.sort_ascending = !q.sort_ascending;
            } else {
                q.sort_field = field;
                q.sort_ascending = true;
            }
            q.page = 0;
        });
    };
    let sort_indicator = move |field: SortField| {
        query.with(|q| get_sort_indicator(q.sort_field == field, q.sort_ascending))
    };

    let change_status = move |id: String, status: RequestStatus| {
        if busy_id.get_untracked().is_some() {
            return;
        }
        set_busy_id.set(Some(id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_status(&id, status).await {
                Ok(()) => {
                    set_error.set(None);
                    items.update(|list| {
                        if let Some(row) = list.iter_mut().find(|r| r.id == id) {
                            row.status = status;
                        }
                    });
                }
                // The row keeps its status so the decision can be retried.
                Err(e) => set_error.set(Some(e)),
            }
            set_busy_id.set(None);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{kind.list_name()}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || query.with(|q| q.search.clone()))
                        on_change=Callback::new(move |text: String| {
                            query.update(|q| {
                                q.search = text;
                                q.page = 0;
                            });
                        })
                    />
                    <button
                        class="button button--secondary"
                        on:click=move |_| fetch()
                        disabled=move || loading.get()
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

            <Show when=move || !loading.get() fallback=|| view! { <div class="page__loading">{"Loading..."}</div> }>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell table__header-cell--sortable"
                                    on:click=move |_| toggle_sort(SortField::Reference)>
                                    {"Reference"}{move || sort_indicator(SortField::Reference)}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable"
                                    on:click=move |_| toggle_sort(SortField::Customer)>
                                    {"Customer"}{move || sort_indicator(SortField::Customer)}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable"
                                    on:click=move |_| toggle_sort(SortField::City)>
                                    {"City"}{move || sort_indicator(SortField::City)}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable"
                                    on:click=move |_| toggle_sort(SortField::RequestedAt)>
                                    {"Requested"}{move || sort_indicator(SortField::RequestedAt)}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable"
                                    on:click=move |_| toggle_sort(SortField::Status)>
                                    {"Status"}{move || sort_indicator(SortField::Status)}
                                </th>
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || page.get().rows.into_iter().map(|row| {
                                let row_id = row.id.clone();
                                let is_busy = {
                                    let id = row.id.clone();
                                    move || busy_id.get().as_deref() == Some(id.as_str())
                                };
                                let targets = config.allowed_targets(row.status);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.reference.clone()}</td>
                                        <td class="table__cell">{row.customer_name.clone()}</td>
                                        <td class="table__cell">{row.city.clone()}</td>
                                        <td class="table__cell">
                                            {row.requested_at.format("%Y-%m-%d %H:%M").to_string()}
                                        </td>
                                        <td class="table__cell">
                                            <span class={status_class(row.status)}>{row.status.label()}</span>
                                        </td>
                                        <td class="table__cell">
                                            {targets.iter().map(|&target| {
                                                let id = row_id.clone();
                                                let is_busy = is_busy.clone();
                                                let appearance = match target {
                                                    RequestStatus::Rejected => ButtonAppearance::Secondary,
                                                    _ => ButtonAppearance::Primary,
                                                };
                                                view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=appearance
                                                        disabled=Signal::derive(is_busy)
                                                        on_click=move |_| change_status(id.clone(), target)
                                                    >
                                                        {target.label()}
                                                    </Button>
                                                }
                                            }).collect_view()}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || page.get().page)
                    total_pages=Signal::derive(move || page.get().total_pages)
                    total_count=Signal::derive(move || page.get().total_count)
                    page_size=Signal::derive(move || query.with(|q| q.page_size))
                    on_page_change=Callback::new(move |p: usize| query.update(|q| q.page = p))
                    on_page_size_change=Callback::new(move |size: usize| {
                        query.update(|q| {
                            q.page_size = size;
                            q.page = 0;
                        });
                    })
                />
            </Show>
        </div>
    }
}
