use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Фильтр списка заказов. `None` означает «не задано»: такой параметр
/// не попадает в строку запроса, и сервер не ограничивает выборку по нему.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderListFilter {
    /// Нижняя граница даты создания (включительно)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,

    /// Верхняя граница даты создания (включительно)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,

    /// Статус сдачи: `None` — все заказы
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_delivered: Option<bool>,
}

impl OrderListFilter {
    pub fn is_empty(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none() && self.is_delivered.is_none()
    }
}
