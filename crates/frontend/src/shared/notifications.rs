//! Сервис всплывающих уведомлений.
//!
//! Использование:
//! ```ignore
//! let notify = use_context::<NotificationService>().unwrap();
//! notify.success("Заказ успешно создан");
//! notify.error("Ошибка сети");
//! ```
//! Сообщения исчезают сами через несколько секунд; результат показа
//! никем не потребляется.

use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Центральный сервис уведомлений, кладётся в контекст приложения.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    /// Текущий стек сообщений (для рендера).
    pub fn items(&self) -> RwSignal<Vec<Notification>> {
        self.items
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let id = self.next_id.with_value(|v| *v) + 1;
        self.next_id.set_value(id);

        self.items
            .update(|list| list.push(Notification { id, kind, message }));

        let items = self.items;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_MS).await;
            items.update(|list| list.retain(|n| n.id != id));
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Контейнер уведомлений, рендерится один раз на всё приложение.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        <div
            class="notifications"
            style="position: fixed; top: 16px; right: 16px; z-index: 1100; display: flex; flex-direction: column; gap: 8px;"
        >
            <For
                each=move || service.items().get()
                key=|n| n.id
                children=move |n| {
                    let style = match n.kind {
                        NotificationKind::Success => {
                            "background: #e6f7ee; border: 1px solid #9fdcc0; color: #1d7a4f;"
                        }
                        NotificationKind::Error => {
                            "background: #fdecea; border: 1px solid #f3b0a9; color: #b3261e;"
                        }
                    };
                    view! {
                        <div
                            class="notifications__item"
                            style=format!(
                                "padding: 10px 14px; border-radius: 6px; box-shadow: 0 2px 8px rgba(0,0,0,0.12); font-size: 0.875rem; {}",
                                style,
                            )
                        >
                            {n.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
