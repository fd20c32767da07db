use contracts::domain::a005_sms_template::{SmsTemplate, UpdateSmsTemplateRequest};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::domain::a005_sms_template::api;
use crate::shared::icons::icon;

/// Working copy of the template being edited.
#[derive(Clone)]
struct TemplateDraft {
    id: String,
    title: String,
    body: String,
    is_active: bool,
}

impl TemplateDraft {
    fn from_template(template: &SmsTemplate) -> Self {
        Self {
            id: template.id.clone(),
            title: template.title.clone(),
            body: template.body.clone(),
            is_active: template.is_active,
        }
    }
}

/// SMS template settings: template list with one inline editor at a time.
#[component]
#[allow(non_snake_case)]
pub fn SmsTemplatesPage() -> impl IntoView {
    let templates = RwSignal::new(Vec::<SmsTemplate>::new());
    let draft = RwSignal::new(None::<TemplateDraft>);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_templates().await {
                Ok(list) => {
                    templates.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let handle_save = move || {
        if saving.get_untracked() {
            return;
        }
        let Some(current) = draft.get_untracked() else {
            return;
        };
        // Validate on a copy of the stored template with the edits applied.
        let Some(mut edited) = templates
            .with_untracked(|list| list.iter().find(|t| t.id == current.id).cloned())
        else {
            return;
        };
        edited.title = current.title.clone();
        edited.body = current.body.clone();
        edited.is_active = current.is_active;
        if let Err(e) = edited.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        let update = UpdateSmsTemplateRequest {
            title: current.title.clone(),
            body: current.body.clone(),
            is_active: current.is_active,
        };
        let id = current.id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_template(&id, &update).await {
                Ok(()) => {
                    templates.update(|list| {
                        if let Some(t) = list.iter_mut().find(|t| t.id == id) {
                            t.title = update.title.clone();
                            t.body = update.body.clone();
                            t.is_active = update.is_active;
                        }
                    });
                    draft.set(None);
                    set_notice.set(Some("Template saved".to_string()));
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(2000).await;
                        set_notice.set(None);
                    });
                }
                // Edits stay in the form so the operator can retry.
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"SMS templates"}</h1>
                    <p class="header__subtitle">
                        {"Texts sent to customers on request decisions. Placeholders in {braces} are filled in automatically."}
                    </p>
                </div>
                <div class="header__actions">
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
                </div>
            })}

            {move || notice.get().map(|n| view! {
                <div class="notice-box">
                    {icon("check")}
                    <span>{n}</span>
                </div>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <div class="page__loading">{"Loading..."}</div> }>
                <div class="card-list">
                    {move || templates.get().into_iter().map(|template| {
                        let id = template.id.clone();
                        let is_editing = {
                            let id = id.clone();
                            move || draft.with(|d| d.as_ref().map(|d| d.id == id).unwrap_or(false))
                        };
                        let start_edit = {
                            let template = template.clone();
                            move |_| draft.set(Some(TemplateDraft::from_template(&template)))
                        };
                        view! {
                            <div class="card">
                                <div class="card__header">
                                    <div class="card__title-group">
                                        <span class="card__title">{template.title.clone()}</span>
                                        <span class="card__subtitle">{template.key.clone()}</span>
                                    </div>
                                    <span class={if template.is_active { "badge badge--success" } else { "badge" }}>
                                        {if template.is_active { "Active" } else { "Inactive" }}
                                    </span>
                                    <Show when={let is_editing = is_editing.clone(); move || !is_editing()}>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Secondary
                                            on_click=start_edit.clone()
                                        >
                                            {"Edit"}
                                        </Button>
                                    </Show>
                                </div>

                                <Show
                                    when=is_editing.clone()
                                    fallback={
                                        let body = template.body.clone();
                                        move || view! { <p class="card__body">{body.clone()}</p> }
                                    }
                                >
                                    <div class="details-form">
                                        <div class="form-group">
                                            <label>{"Title"}</label>
                                            <input
                                                type="text"
                                                prop:value=move || draft.with(|d| d.as_ref().map(|d| d.title.clone()).unwrap_or_default())
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    draft.update(|d| if let Some(d) = d.as_mut() { d.title = value; });
                                                }
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label>{"Body"}</label>
                                            <textarea
                                                rows="4"
                                                prop:value=move || draft.with(|d| d.as_ref().map(|d| d.body.clone()).unwrap_or_default())
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    draft.update(|d| if let Some(d) = d.as_mut() { d.body = value; });
                                                }
                                            ></textarea>
                                        </div>
                                        <div class="form-group">
                                            <label>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || draft.with(|d| d.as_ref().map(|d| d.is_active).unwrap_or(false))
                                                    on:change=move |_| {
                                                        draft.update(|d| if let Some(d) = d.as_mut() { d.is_active = !d.is_active; });
                                                    }
                                                />
                                                {"Active"}
                                            </label>
                                        </div>
                                        <div class="form-group form-group--actions">
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || saving.get())
                                                on_click=move |_| handle_save()
                                            >
                                                {move || if saving.get() { "Saving..." } else { "Save" }}
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| {
                                                    draft.set(None);
                                                    set_error.set(None);
                                                }
                                            >
                                                {"Cancel"}
                                            </Button>
                                        </div>
                                    </div>
                                </Show>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
