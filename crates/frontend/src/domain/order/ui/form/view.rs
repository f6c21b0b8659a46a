use super::view_model::OrderFormViewModel;
use crate::shared::components::date_input::DateInput;
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use crate::shared::number_format::{format_money, format_money_rub};
use chrono::NaiveDate;
use contracts::domain::contractor::aggregate::Contractor;
use contracts::domain::order::draft::OrderItemInput;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderForm(
    /// id заказа для редактирования, None — создание
    id: Option<i64>,
    /// Справочник контрагентов — внешняя зависимость формы,
    /// загружается родителем и передаётся сюда
    #[prop(into)]
    contractors: Signal<Vec<Contractor>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let vm = OrderFormViewModel::new(id, notify);
    vm.load_if_needed();

    let item_at = move |idx: usize| {
        vm.form
            .with_untracked(|d| d.items.get(idx).cloned().unwrap_or_else(OrderItemInput::empty))
    };

    view! {
        <div
            class="details-container"
            style="max-width: 960px; margin: 0 auto; padding: 24px;"
        >
            <div class="details-header" style="margin-bottom: 16px;">
                <h2 style="margin: 0;">
                    {if vm.is_edit_mode() {
                        format!("Редактирование заказа №{}", vm.editing_id.unwrap_or_default())
                    } else {
                        "Новый заказ".to_string()
                    }}
                </h2>
            </div>

            {move || {
                vm.error
                    .get()
                    .map(|e| {
                        view! {
                            <div
                                class="alert alert--error"
                                style="margin-bottom: 12px; padding: 10px 14px; background: #fdecea; border: 1px solid #f3b0a9; border-radius: 6px; color: #b3261e;"
                            >
                                {e}
                            </div>
                        }
                    })
            }}

            <Card>
                <div style="padding: 16px; display: flex; flex-direction: column; gap: 16px;">
                    <div class="form-group" style="display: flex; flex-direction: column; gap: 4px;">
                        <label for="contractor">"Контрагент"</label>
                        <select
                            id="contractor"
                            style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; max-width: 420px;"
                            prop:value=move || {
                                vm.form
                                    .with(|d| {
                                        d.contractor_id.map(|v| v.to_string()).unwrap_or_default()
                                    })
                            }
                            on:change=move |ev| {
                                let contractor_id = event_target_value(&ev).parse::<i64>().ok();
                                vm.form.update(|d| d.contractor_id = contractor_id);
                            }
                        >
                            <option value="">"— выберите контрагента —"</option>
                            <For
                                each=move || contractors.get()
                                key=|c| c.id
                                children=move |c: Contractor| {
                                    view! { <option value=c.id.to_string()>{c.name.clone()}</option> }
                                }
                            />
                        </select>
                    </div>

                    <div class="form-group" style="display: flex; flex-direction: column; gap: 4px;">
                        <label>"Дата сдачи"</label>
                        <DateInput
                            value=Signal::derive(move || {
                                vm.form
                                    .with(|d| {
                                        d.delivery_date
                                            .map(|date| date.format("%Y-%m-%d").to_string())
                                            .unwrap_or_default()
                                    })
                            })
                            on_change=move |v| {
                                let parsed = NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok();
                                vm.form.update(|d| d.delivery_date = parsed);
                            }
                            // Сервер не принимает дату сдачи в прошлом
                            min=today_iso()
                        />
                    </div>
                </div>
            </Card>

            <div class="items-section" style="margin-top: 20px;">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Наименование"</TableHeaderCell>
                            <TableHeaderCell>"Количество"</TableHeaderCell>
                            <TableHeaderCell>"Цена"</TableHeaderCell>
                            <TableHeaderCell>"Сумма"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each={move || (0..vm.form.with(|d| d.items.len())).collect::<Vec<_>>()}
                            key=|idx| *idx
                            children=move |idx: usize| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <input
                                                    type="text"
                                                    placeholder="Наименование"
                                                    style="width: 100%; padding: 4px 6px; border: 1px solid #ced4da; border-radius: 4px;"
                                                    prop:value=move || {
                                                        vm.form
                                                            .with(|d| {
                                                                d.items.get(idx).map(|i| i.name.clone()).unwrap_or_default()
                                                            })
                                                    }
                                                    on:input=move |ev| {
                                                        let mut item = item_at(idx);
                                                        item.name = event_target_value(&ev);
                                                        vm.replace_item(idx, item);
                                                    }
                                                />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    style="width: 100px; padding: 4px 6px; border: 1px solid #ced4da; border-radius: 4px; text-align: right;"
                                                    prop:value=move || {
                                                        vm.form
                                                            .with(|d| {
                                                                d.items
                                                                    .get(idx)
                                                                    .map(|i| i.quantity.to_string())
                                                                    .unwrap_or_default()
                                                            })
                                                    }
                                                    on:input=move |ev| {
                                                        let mut item = item_at(idx);
                                                        item.quantity = event_target_value(&ev)
                                                            .parse()
                                                            .unwrap_or(0.0);
                                                        vm.replace_item(idx, item);
                                                    }
                                                />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    step="0.01"
                                                    style="width: 120px; padding: 4px 6px; border: 1px solid #ced4da; border-radius: 4px; text-align: right;"
                                                    prop:value=move || {
                                                        vm.form
                                                            .with(|d| {
                                                                d.items
                                                                    .get(idx)
                                                                    .map(|i| i.price.to_string())
                                                                    .unwrap_or_default()
                                                            })
                                                    }
                                                    on:input=move |ev| {
                                                        let mut item = item_at(idx);
                                                        item.price = event_target_value(&ev)
                                                            .parse()
                                                            .unwrap_or(0.0);
                                                        vm.replace_item(idx, item);
                                                    }
                                                />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-variant-numeric: tabular-nums;">
                                                    {move || {
                                                        vm.form
                                                            .with(|d| {
                                                                d.items
                                                                    .get(idx)
                                                                    .map(|i| format_money(i.line_total()))
                                                                    .unwrap_or_default()
                                                            })
                                                    }}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <button
                                                    class="button button--icon"
                                                    title="Удалить позицию"
                                                    style="border: none; background: none; cursor: pointer; color: #d93025; padding: 4px;"
                                                    on:click=move |_| vm.remove_item(idx)
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <button
                    class="btn btn-dashed"
                    style="margin-top: 12px; display: inline-flex; align-items: center; gap: 6px; padding: 6px 14px; border: 1px dashed #ced4da; border-radius: 4px; background: #fff; cursor: pointer;"
                    on:click=move |_| vm.add_item()
                >
                    {icon("plus")}
                    "Добавить позицию"
                </button>
            </div>

            <div
                class="total-row"
                style="margin-top: 16px; text-align: right; font-size: 1.125rem; font-weight: 600; color: #1890ff;"
            >
                {move || format!("Итого: {}", format_money_rub(vm.total()))}
            </div>

            <div
                class="form-actions"
                style="margin-top: 20px; display: flex; gap: 8px;"
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save(on_saved)
                    disabled=Signal::derive(move || !vm.can_submit())
                >
                    {move || {
                        if vm.saving.get() { "Запись..." } else { "Сохранить заказ" }
                    }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Отмена"
                </Button>
            </div>
        </div>
    }
}
