use serde::{Deserialize, Serialize};

/// Контрагент (заказчик). Справочник ведётся на сервере,
/// клиент только читает его для выбора в форме заказа.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: i64,
    pub name: String,
}
