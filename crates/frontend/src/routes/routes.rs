use crate::domain::contractor::api::fetch_contractors;
use crate::domain::order::ui::form::OrderForm;
use crate::domain::order::ui::list::OrderList;
use crate::shared::notifications::NotificationService;
use contracts::domain::contractor::aggregate::Contractor;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| {
                view! { <div style="padding: 24px;">"Страница не найдена"</div> }
            }>
                <Route path=path!("/") view=OrderListPage />
                <Route path=path!("/orders/new") view=OrderCreatePage />
                <Route path=path!("/orders/:id/edit") view=OrderEditPage />
            </Routes>
        </Router>
    }
}

#[component]
fn OrderListPage() -> impl IntoView {
    view! { <OrderList /> }
}

/// Общая обвязка формы: загружает справочник контрагентов и передаёт
/// его в форму явным параметром.
#[component]
fn OrderFormPage(id: Option<i64>) -> impl IntoView {
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let contractors: RwSignal<Vec<Contractor>> = RwSignal::new(Vec::new());

    spawn_local(async move {
        match fetch_contractors().await {
            Ok(list) => contractors.set(list),
            Err(e) => notify.error(format!("Ошибка загрузки контрагентов: {}", e)),
        }
    });

    let navigate = use_navigate();
    let back_to_list = Callback::new(move |_: ()| navigate("/", Default::default()));

    view! {
        <OrderForm
            id=id
            contractors=contractors
            on_saved=back_to_list
            on_cancel=back_to_list
        />
    }
}

#[component]
fn OrderCreatePage() -> impl IntoView {
    view! { <OrderFormPage id=None /> }
}

#[component]
fn OrderEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|s| s.parse::<i64>().ok()));

    view! { <OrderFormPage id=id /> }
}
