use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide NotificationService for transient success/error messages
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
        <NotificationHost />
    }
}
