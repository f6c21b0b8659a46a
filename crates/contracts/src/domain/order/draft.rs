use crate::domain::order::aggregate::Order;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибка клиентской валидации. Блокирует отправку формы:
/// запрос к серверу при такой ошибке не выполняется.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Редактируемая строка заказа. Сумма строки нигде не хранится —
/// всегда выводится из quantity и price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

impl OrderItemInput {
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            quantity: 0.0,
            price: 0.0,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Тело запроса записи заказа (POST /api/orders, PUT /api/orders/{id}).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveOrderRequest {
    pub contractor_id: i64,
    pub delivery_date: NaiveDate,
    pub items: Vec<OrderItemInput>,
}

/// Черновик заказа — состояние формы. Живёт только внутри формы:
/// сбрасывается после успешной записи и теряется при уходе со страницы.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub contractor_id: Option<i64>,
    pub delivery_date: Option<NaiveDate>,
    pub items: Vec<OrderItemInput>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Черновик из существующего заказа (режим редактирования).
    pub fn from_order(order: &Order) -> Self {
        Self {
            contractor_id: Some(order.contractor.id),
            delivery_date: Some(order.delivery_date),
            items: order
                .items
                .iter()
                .map(|i| OrderItemInput {
                    name: i.name.clone(),
                    quantity: i.quantity,
                    price: i.price,
                })
                .collect(),
        }
    }

    /// Добавить пустую строку в конец табличной части.
    pub fn add_item(&mut self) {
        self.items.push(OrderItemInput::empty());
    }

    /// Удалить строку по индексу.
    ///
    /// Предусловие: `index < items.len()`. Форма передаёт только индексы
    /// отрисованных строк, поэтому нарушение — ошибка программирования.
    pub fn remove_item(&mut self, index: usize) {
        self.items.remove(index);
    }

    /// Заменить строку по индексу новым значением.
    ///
    /// Предусловие: `index < items.len()` (см. [`Self::remove_item`]).
    pub fn replace_item(&mut self, index: usize, item: OrderItemInput) {
        self.items[index] = item;
    }

    /// Итого по черновику. Пересчитывается целиком при каждом чтении.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItemInput::line_total).sum()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_request().map(|_| ())
    }

    /// Снимок черновика для отправки на сервер. Выполняет валидацию;
    /// при ошибке тело запроса не формируется.
    pub fn to_request(&self) -> Result<SaveOrderRequest, ValidationError> {
        let contractor_id = self
            .contractor_id
            .ok_or_else(|| ValidationError("Укажите контрагента".into()))?;
        let delivery_date = self
            .delivery_date
            .ok_or_else(|| ValidationError("Укажите дату сдачи".into()))?;
        if self.total() <= 0.0 {
            return Err(ValidationError("Сумма заказа должна быть больше 0".into()));
        }
        Ok(SaveOrderRequest {
            contractor_id,
            delivery_date,
            items: self.items.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: f64, price: f64) -> OrderItemInput {
        OrderItemInput {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    fn filled_draft() -> OrderDraft {
        OrderDraft {
            contractor_id: Some(1),
            delivery_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            items: vec![item("Стол", 2.0, 1500.0), item("Стул", 4.0, 700.0)],
        }
    }

    #[test]
    fn total_is_sum_of_line_totals() {
        let draft = filled_draft();
        assert_eq!(draft.total(), 2.0 * 1500.0 + 4.0 * 700.0);
    }

    #[test]
    fn total_of_empty_draft_is_zero() {
        assert_eq!(OrderDraft::new().total(), 0.0);
    }

    #[test]
    fn add_then_remove_restores_items() {
        let mut draft = filled_draft();
        let before = draft.items.clone();

        draft.add_item();
        assert_eq!(draft.items.len(), before.len() + 1);
        assert_eq!(draft.items.last(), Some(&OrderItemInput::empty()));

        draft.remove_item(draft.items.len() - 1);
        assert_eq!(draft.items, before);
    }

    #[test]
    fn new_item_has_zero_line_total() {
        assert_eq!(OrderItemInput::empty().line_total(), 0.0);
    }

    #[test]
    fn replace_item_updates_total() {
        let mut draft = filled_draft();
        draft.replace_item(0, item("Стол", 3.0, 1500.0));
        assert_eq!(draft.total(), 3.0 * 1500.0 + 4.0 * 700.0);
    }

    #[test]
    fn zero_total_fails_validation() {
        let mut draft = filled_draft();
        draft.items = vec![item("Стол", 0.0, 1500.0)];
        let err = draft.validate().unwrap_err();
        assert_eq!(err, ValidationError("Сумма заказа должна быть больше 0".into()));
        assert!(draft.to_request().is_err());
    }

    #[test]
    fn missing_contractor_fails_validation() {
        let mut draft = filled_draft();
        draft.contractor_id = None;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn valid_draft_builds_request() {
        let draft = filled_draft();
        let req = draft.to_request().unwrap();
        assert_eq!(req.contractor_id, 1);
        assert_eq!(req.items, draft.items);
    }
}
