use crate::domain::order::api;
use contracts::domain::order::aggregate::Order;
use contracts::domain::order::draft::SaveOrderRequest;
use contracts::domain::order::filter::OrderListFilter;

/// Загрузить заказ для редактирования.
///
/// Эндпоинта чтения одного заказа у бэкенда нет, поэтому берём
/// общий список без фильтров и ищем по id.
pub async fn fetch_order(id: i64) -> Result<Order, String> {
    let orders = api::fetch_orders(&OrderListFilter::default()).await?;
    orders
        .into_iter()
        .find(|o| o.id == id)
        .ok_or_else(|| format!("Заказ №{} не найден", id))
}

pub async fn save_order(id: Option<i64>, req: &SaveOrderRequest) -> Result<Order, String> {
    match id {
        Some(id) => api::update_order(id, req).await,
        None => api::create_order(req).await,
    }
}
