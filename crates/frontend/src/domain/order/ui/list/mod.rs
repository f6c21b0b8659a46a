pub mod state;

use self::state::{create_state, remove_by_id};
use crate::domain::order::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::fetch_guard::FetchSequence;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, Sortable};
use crate::shared::notifications::NotificationService;
use crate::shared::number_format::format_money;
use contracts::domain::order::aggregate::Order;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "date" => self.date.cmp(&other.date),
            "delivery_date" => self.delivery_date.cmp(&other.delivery_date),
            "contractor" => self
                .contractor
                .name
                .to_lowercase()
                .cmp(&other.contractor.name.to_lowercase()),
            "is_delivered" => self.is_delivered.cmp(&other.is_delivered),
            "total" => self
                .total
                .partial_cmp(&other.total)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let navigate = use_navigate();
    let go = Callback::new(move |path: String| navigate(&path, Default::default()));

    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (confirm_delete, set_confirm_delete) = signal::<Option<i64>>(None);

    // Вся серверная выборка; клиент только сортирует и пагинирует
    let all_orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());

    // Билеты запросов: при смене фильтра во время загрузки поздний
    // ответ старого запроса отбрасывается, применяется только новый
    let fetch_seq = StoredValue::new_local(FetchSequence::new());

    let refresh_page = move || {
        let mut sorted = all_orders.get_untracked();
        let field = state.with_untracked(|s| s.sort_field.clone());
        let ascending = state.with_untracked(|s| s.sort_ascending);
        let page_size = state.with_untracked(|s| s.page_size);
        let page = state.with_untracked(|s| s.page);

        sort_list(&mut sorted, &field, ascending);

        let total = sorted.len();
        let total_pages = total.div_ceil(page_size);
        let page = page.min(total_pages.saturating_sub(1));
        let start = page * page_size;
        let end = (start + page_size).min(total);
        let page_items = if start < total {
            sorted[start..end].to_vec()
        } else {
            Vec::new()
        };

        state.update(|s| {
            s.orders = page_items;
            s.total_count = total;
            s.total_pages = total_pages;
            s.page = page;
        });
    };

    let load_orders = move || {
        let ticket = fetch_seq.with_value(|s| s.begin());
        let filter = state.with_untracked(|s| s.filter());
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_orders(&filter).await;

            if !fetch_seq.with_value(|s| s.is_current(ticket)) {
                // Ответ вытесненного запроса: не трогаем ни данные,
                // ни флаг загрузки
                return;
            }

            match result {
                Ok(items) => {
                    log!("Загружено {} заказов", items.len());
                    all_orders.set(items);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_page();
                }
                Err(e) => {
                    // Прошлая успешная выборка остаётся на экране
                    set_error.set(Some(e.clone()));
                    notify.error(e);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_orders();
        }
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
            s.page = 0;
        });
        refresh_page();
    };

    let go_to_page = move |new_page: usize| {
        state.update(|s| s.page = new_page);
        refresh_page();
    };

    let change_page_size = move |new_size: usize| {
        state.update(|s| {
            s.page_size = new_size;
            s.page = 0;
        });
        refresh_page();
    };

    let delete_confirmed = move |id: i64| {
        set_confirm_delete.set(None);
        spawn_local(async move {
            match api::delete_order(id).await {
                Ok(()) => {
                    // Строка убирается только после подтверждения сервером
                    all_orders.update(|orders| remove_by_id(orders, id));
                    refresh_page();
                    notify.success("Заказ успешно удалён");
                }
                Err(e) => {
                    log!("Не удалось удалить заказ {}: {}", id, e);
                    notify.error("Произошла ошибка при удалении заказа");
                }
            }
        });
    };

    let sortable_header = move |label: &'static str, field: &'static str| {
        view! {
            <div
                class="table__sortable-header"
                style="cursor: pointer; user-select: none;"
                on:click=move |_| toggle_sort(field)
            >
                {label}
                {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
            </div>
        }
    };

    view! {
        <div class="page" style="padding: 24px;">
            <div
                class="page__header"
                style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;"
            >
                <div style="display: flex; align-items: baseline; gap: 10px;">
                    <h1 class="page__title" style="margin: 0;">"Заказы"</h1>
                    <span style="color: #888; font-size: 0.875rem;">
                        {move || format!("{}", state.get().total_count)}
                    </span>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| go.run("/orders/new".to_string())
                >
                    "Создать заказ"
                </Button>
            </div>

            <div
                class="filters-section"
                style="display: flex; align-items: center; gap: 12px; margin-bottom: 16px; padding: 12px 16px; background: #fafafa; border: 1px solid #f0f0f0; border-radius: 6px;"
            >
                {icon("filter")}
                <label style="font-size: 0.875rem;">"Дата с"</label>
                <DateInput
                    value=Signal::derive(move || state.with(|s| s.date_from.clone()))
                    on_change=move |v| {
                        state.update(|s| s.date_from = v);
                        load_orders();
                    }
                    max=today_iso()
                />
                <label style="font-size: 0.875rem;">"Дата по"</label>
                <DateInput
                    value=Signal::derive(move || state.with(|s| s.date_to.clone()))
                    on_change=move |v| {
                        state.update(|s| s.date_to = v);
                        load_orders();
                    }
                    max=today_iso()
                />
                <label style="font-size: 0.875rem;">"Статус"</label>
                <select
                    style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;"
                    prop:value=move || {
                        state.with(|s| match s.delivered {
                            None => "".to_string(),
                            Some(true) => "true".to_string(),
                            Some(false) => "false".to_string(),
                        })
                    }
                    on:change=move |ev| {
                        let delivered = match event_target_value(&ev).as_str() {
                            "true" => Some(true),
                            "false" => Some(false),
                            _ => None,
                        };
                        state.update(|s| s.delivered = delivered);
                        load_orders();
                    }
                >
                    <option value="">"Все"</option>
                    <option value="true">"Сданные"</option>
                    <option value="false">"В работе"</option>
                </select>

                <div style="flex: 1;"></div>

                <PaginationControls
                    current_page=Signal::derive(move || state.get().page)
                    total_pages=Signal::derive(move || state.get().total_pages)
                    total_count=Signal::derive(move || state.get().total_count)
                    page_size=Signal::derive(move || state.get().page_size)
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />

                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_orders()
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                </Button>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div
                                class="alert alert--error"
                                style="margin-bottom: 12px; padding: 10px 14px; background: #fdecea; border: 1px solid #f3b0a9; border-radius: 6px; color: #b3261e;"
                            >
                                {err}
                            </div>
                        }
                    })
            }}

            <div class="table-wrapper">
                <Table attr:style="width: 100%; min-width: 860px;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{sortable_header("№", "id")}</TableHeaderCell>
                            <TableHeaderCell>{sortable_header("Дата", "date")}</TableHeaderCell>
                            <TableHeaderCell>
                                {sortable_header("Контрагент", "contractor")}
                            </TableHeaderCell>
                            <TableHeaderCell>
                                {sortable_header("Дата сдачи", "delivery_date")}
                            </TableHeaderCell>
                            <TableHeaderCell>
                                {sortable_header("Статус", "is_delivered")}
                            </TableHeaderCell>
                            <TableHeaderCell>{sortable_header("Сумма", "total")}</TableHeaderCell>
                            <TableHeaderCell>"Действия"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || state.get().orders
                            key=|o| o.id
                            children=move |o: Order| {
                                let id = o.id;
                                let status = if o.is_delivered {
                                    view! {
                                        <span
                                            class="status-tag status-tag--delivered"
                                            style="padding: 2px 10px; border-radius: 4px; font-size: 0.8125rem; background: #e6f7ff; color: #1890ff; border: 1px solid #91d5ff;"
                                        >
                                            "Сдан"
                                        </span>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <span
                                            class="status-tag status-tag--pending"
                                            style="padding: 2px 10px; border-radius: 4px; font-size: 0.8125rem; background: #fff7e6; color: #fa8c16; border: 1px solid #ffd591;"
                                        >
                                            "В работе"
                                        </span>
                                    }
                                        .into_any()
                                };

                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{id}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(&o.date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {o.contractor.name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_date(&o.delivery_date.to_string())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-variant-numeric: tabular-nums; display: block; text-align: right; width: 100%;">
                                                    {format!("{} ₽", format_money(o.total))}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div
                                                    class="actions-column"
                                                    style="display: flex; gap: 4px;"
                                                >
                                                    <button
                                                        class="button button--icon"
                                                        title="Редактировать"
                                                        style="border: none; background: none; cursor: pointer; color: #1890ff; padding: 4px;"
                                                        on:click=move |_| {
                                                            go.run(format!("/orders/{}/edit", id))
                                                        }
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--icon"
                                                        title="Печать"
                                                        style="border: none; background: none; cursor: pointer; color: #1890ff; padding: 4px;"
                                                        on:click=move |_| api::open_pdf(id)
                                                    >
                                                        {icon("printer")}
                                                    </button>
                                                    <button
                                                        class="button button--icon"
                                                        title="Удалить"
                                                        style="border: none; background: none; cursor: pointer; color: #d93025; padding: 4px;"
                                                        on:click=move |_| set_confirm_delete.set(Some(id))
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                {move || {
                    (!loading.get() && state.get().total_count == 0)
                        .then(|| {
                            view! {
                                <div style="padding: 24px; text-align: center; color: #888;">
                                    "Нет заказов по выбранным условиям"
                                </div>
                            }
                        })
                }}
            </div>

            {move || {
                confirm_delete
                    .get()
                    .map(|id| {
                        view! {
                            <ConfirmDialog
                                title="Удаление заказа".to_string()
                                message="Вы уверены, что хотите удалить этот заказ?".to_string()
                                confirm_label="Удалить".to_string()
                                cancel_label="Отмена".to_string()
                                on_confirm=Callback::new(move |_| delete_confirmed(id))
                                on_cancel=Callback::new(move |_| set_confirm_delete.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
