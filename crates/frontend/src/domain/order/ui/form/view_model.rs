use super::model;
use crate::shared::notifications::NotificationService;
use contracts::domain::order::draft::{OrderDraft, OrderItemInput};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы заказа.
///
/// Черновик принадлежит форме целиком: табличная часть меняется только
/// через команды ниже, каждое изменение кладёт новое значение строки
/// на её позицию.
#[derive(Clone, Copy)]
pub struct OrderFormViewModel {
    /// id заказа в режиме редактирования, None — новый заказ
    pub editing_id: Option<i64>,
    pub form: RwSignal<OrderDraft>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    notify: NotificationService,
}

impl OrderFormViewModel {
    pub fn new(editing_id: Option<i64>, notify: NotificationService) -> Self {
        Self {
            editing_id,
            form: RwSignal::new(OrderDraft::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            notify,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// В режиме редактирования подтянуть заказ с сервера.
    pub fn load_if_needed(&self) {
        let Some(id) = self.editing_id else {
            return;
        };

        let this = *self;
        spawn_local(async move {
            match model::fetch_order(id).await {
                Ok(order) => this.form.set(OrderDraft::from_order(&order)),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    /// Итого по черновику; пересчитывается при каждом чтении.
    pub fn total(&self) -> f64 {
        self.form.with(|d| d.total())
    }

    /// Кнопка записи доступна, когда выбраны контрагент и дата сдачи.
    /// Остальное проверяет `OrderDraft::validate` при отправке.
    pub fn can_submit(&self) -> bool {
        !self.saving.get()
            && self
                .form
                .with(|d| d.contractor_id.is_some() && d.delivery_date.is_some())
    }

    pub fn add_item(&self) {
        self.form.update(|d| d.add_item());
    }

    /// Предусловие: index — индекс отрисованной строки.
    pub fn remove_item(&self, index: usize) {
        self.form.update(|d| d.remove_item(index));
    }

    /// Положить новое значение строки на позицию index.
    pub fn replace_item(&self, index: usize, item: OrderItemInput) {
        self.form.update(|d| d.replace_item(index, item));
    }

    /// Записать заказ. Валидация выполняется до обращения к сети:
    /// невалидный черновик не порождает запроса.
    pub fn save(&self, on_saved: Callback<()>) {
        let draft = self.form.get_untracked();
        let req = match draft.to_request() {
            Ok(req) => req,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                self.notify.error(e.to_string());
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            match model::save_order(this.editing_id, &req).await {
                Ok(_) => {
                    this.notify.success(if this.is_edit_mode() {
                        "Заказ сохранён"
                    } else {
                        "Заказ успешно создан"
                    });
                    // Черновик сбрасывается после успешной записи
                    this.form.set(OrderDraft::new());
                    this.error.set(None);
                    on_saved.run(());
                }
                Err(e) => {
                    log!("Не удалось записать заказ: {}", e);
                    this.error.set(Some(e));
                    this.notify.error("Ошибка при создании заказа");
                }
            }
            this.saving.set(false);
        });
    }
}
