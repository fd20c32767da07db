use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::routes::ActivePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Application state is provided through context, never through module
    // singletons, so pages stay testable in isolation.
    provide_context(AppGlobalContext::new());

    view! {
        <Shell center=|| view! { <ActivePage /> }.into_any() />
    }
}
