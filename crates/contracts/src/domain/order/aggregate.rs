use crate::domain::contractor::aggregate::Contractor;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Строка заказа в том виде, в котором её отдаёт сервер.
///
/// `total` вычисляется сервером при записи; клиент его не пересчитывает
/// и не хранит отдельно от quantity/price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    pub total: f64,
}

/// Заказ. Источник истины — сервер: id, date и total назначаются там.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Дата создания (ISO-строка сервера, только для отображения)
    pub date: String,
    /// Дата сдачи
    pub delivery_date: NaiveDate,
    pub is_delivered: bool,
    pub contractor: Contractor,
    /// Итого по заказу = Σ quantity × price на момент последней записи
    pub total: f64,
    pub items: Vec<OrderItem>,
}
