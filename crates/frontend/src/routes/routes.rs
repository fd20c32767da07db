use crate::domain::a001_warehouse::ui::WarehouseOrderPage;
use crate::domain::a003_inventory_count::ui::CountPage;
use crate::domain::a004_service_request::ui::RequestListPage;
use crate::domain::a005_sms_template::ui::SmsTemplatesPage;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a004_service_request::RequestKind;
use leptos::prelude::*;
// Page switching goes through the global context instead of Router
// components (see layout/global_context.rs).

#[component]
pub fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    move || match ctx.active.get().as_str() {
        "a003_inventory_count" => view! { <CountPage /> }.into_any(),
        "a004_maintenance_contracts" => {
            view! { <RequestListPage kind=RequestKind::MaintenanceContract /> }.into_any()
        }
        "a004_safety_plans" => {
            view! { <RequestListPage kind=RequestKind::SafetyPlan /> }.into_any()
        }
        "a004_engineering_plans" => {
            view! { <RequestListPage kind=RequestKind::EngineeringPlan /> }.into_any()
        }
        "a004_extinguisher_maintenance" => {
            view! { <RequestListPage kind=RequestKind::ExtinguisherMaintenance /> }.into_any()
        }
        "a005_sms_templates" => view! { <SmsTemplatesPage /> }.into_any(),
        // default: warehouse priority list
        _ => view! { <WarehouseOrderPage /> }.into_any(),
    }
}
