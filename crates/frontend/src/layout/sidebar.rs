//! Sidebar with grouped navigation items.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            items: vec![
                ("a001_warehouse", "Warehouse priority", "warehouse"),
                ("a003_inventory_count", "Inventory count", "clipboard"),
            ],
        },
        MenuGroup {
            id: "requests",
            label: "Service requests",
            items: vec![
                ("a004_maintenance_contracts", "Maintenance contracts", "file-text"),
                ("a004_safety_plans", "Safety plans", "shield"),
                ("a004_engineering_plans", "Engineering plans", "file-text"),
                ("a004_extinguisher_maintenance", "Extinguisher maintenance", "flame"),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            items: vec![("a005_sms_templates", "SMS templates", "message")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="sidebar">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(key, label, icon_name)| {
                                    let is_active =
                                        move || ctx.active.get() == key;
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active=is_active
                                            on:click=move |_| ctx.activate(key)
                                        >
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
