use crate::layout::global_context::{AppGlobalContext, SessionState};
use crate::shared::icons::icon;
use crate::shared::session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <header class="top-header">
            <button
                class="top-header__toggle"
                title="Toggle sidebar"
                on:click=move |_| ctx.left_open.update(|open| *open = !*open)
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                {icon("flame")}
                <span class="top-header__title">{"Fire Safety Back Office"}</span>
            </div>
            <div class="top-header__spacer"></div>
            <span class="top-header__operator">
                {move || ctx.session.get().operator.unwrap_or_else(|| "Operator".to_string())}
            </span>
            <button
                class="top-header__signout"
                title="Sign out"
                on:click=move |_| {
                    session::clear_session();
                    ctx.session.set(SessionState::default());
                }
            >
                {icon("x")}
            </button>
        </header>
    }
}
