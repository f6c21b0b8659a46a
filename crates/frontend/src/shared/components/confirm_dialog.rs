use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальный диалог подтверждения опасного действия.
///
/// Рендерится поверх страницы; закрывается по Отмене или клику
/// по подложке, действие выполняется только по явному подтверждению.
#[component]
pub fn ConfirmDialog(
    /// Заголовок диалога
    title: String,
    /// Текст вопроса
    message: String,
    /// Подпись кнопки подтверждения (например, "Удалить")
    confirm_label: String,
    /// Подпись кнопки отмены
    cancel_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_overlay_click = move |_| {
        on_cancel.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            style="position: fixed; inset: 0; background: rgba(0,0,0,0.45); z-index: 1000; display: flex; align-items: center; justify-content: center;"
            on:click=handle_overlay_click
        >
            <div
                class="modal"
                style="background: #fff; border-radius: 8px; min-width: 360px; max-width: 480px; padding: 20px 24px; box-shadow: 0 8px 24px rgba(0,0,0,0.2);"
                on:click=stop_propagation
            >
                <div class="modal-header" style="display: flex; align-items: center; gap: 10px; margin-bottom: 12px;">
                    <span style="color: #faad14; display: inline-flex;">
                        {icon("alert-triangle")}
                    </span>
                    <h3 style="margin: 0; font-size: 1rem;">{title}</h3>
                </div>

                <div class="modal-body" style="margin-bottom: 20px; color: #444; font-size: 0.875rem;">
                    {message}
                </div>

                <div class="modal-actions" style="display: flex; justify-content: flex-end; gap: 8px;">
                    <button
                        class="btn btn-secondary"
                        style="padding: 6px 14px; border: 1px solid #ced4da; border-radius: 4px; background: #fff; cursor: pointer;"
                        on:click=move |_| on_cancel.run(())
                    >
                        {cancel_label}
                    </button>
                    <button
                        class="btn btn-danger"
                        style="padding: 6px 14px; border: none; border-radius: 4px; background: #d93025; color: #fff; cursor: pointer;"
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
