use leptos::prelude::*;

/// Поле ввода даты на нативном date picker.
/// Браузер сам показывает дату в локальном формате (dd.mm.yyyy для RU).
#[component]
pub fn DateInput(
    /// Значение в формате yyyy-mm-dd (пустая строка — дата не выбрана)
    #[prop(into)]
    value: Signal<String>,
    /// Callback при изменении (получает yyyy-mm-dd или пустую строку)
    on_change: impl Fn(String) + 'static,
    /// Минимально допустимая дата (yyyy-mm-dd)
    #[prop(optional, into)]
    min: Option<String>,
    /// Максимально допустимая дата (yyyy-mm-dd)
    #[prop(optional, into)]
    max: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            prop:value=value
            min=min.unwrap_or_default()
            max=max.unwrap_or_default()
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
            style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 140px;"
        />
    }
}
