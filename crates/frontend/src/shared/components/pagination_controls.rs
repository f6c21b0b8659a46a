use crate::shared::icons::icon;
use leptos::prelude::*;

/// Переиспользуемые элементы постраничной навигации.
#[component]
pub fn PaginationControls(
    /// Текущая страница (с нуля)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Всего страниц
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Всего записей
    #[prop(into)]
    total_count: Signal<usize>,

    /// Размер страницы
    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let page_size_opts: Vec<usize> = vec![10, 20, 50, 100];

    view! {
        <div class="pagination-controls" style="display: flex; align-items: center; gap: 4px;">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info" style="padding: 0 8px; font-size: 0.875rem;">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    format!("{} / {} (всего {})", page + 1, total, total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>

            <select
                style="margin-left: 8px; padding: 4px 6px; border: 1px solid #ced4da; border-radius: 4px;"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {page_size_opts
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || page_size.get() == size
                            >
                                {format!("{} на стр.", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
