use chrono::NaiveDate;
use contracts::domain::order::aggregate::Order;
use contracts::domain::order::filter::OrderListFilter;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrderListState {
    // Фильтры (yyyy-mm-dd, пустая строка — не задано)
    pub date_from: String,
    pub date_to: String,
    /// None — все статусы
    pub delivered: Option<bool>,

    // Сортировка
    pub sort_field: String,
    pub sort_ascending: bool,

    // Отображаемая страница выборки
    pub orders: Vec<Order>,

    // Флаг первой загрузки
    pub is_loaded: bool,

    // Клиентская пагинация
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            date_from: String::new(),
            date_to: String::new(),
            delivered: None,
            sort_field: "id".to_string(),
            sort_ascending: false,
            orders: Vec::new(),
            is_loaded: false,
            page: 0,
            page_size: 10,
            total_count: 0,
            total_pages: 0,
        }
    }
}

impl OrderListState {
    /// Текущий фильтр для запроса к серверу. Невалидные или пустые
    /// даты считаются незаданными.
    pub fn filter(&self) -> OrderListFilter {
        OrderListFilter {
            date_from: NaiveDate::parse_from_str(&self.date_from, "%Y-%m-%d").ok(),
            date_to: NaiveDate::parse_from_str(&self.date_to, "%Y-%m-%d").ok(),
            is_delivered: self.delivered,
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

/// Убрать заказ из локальной коллекции. Вызывается строго после
/// подтверждённого сервером удаления; повторной загрузки списка нет.
pub fn remove_by_id(orders: &mut Vec<Order>, id: i64) {
    orders.retain(|o| o.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::contractor::aggregate::Contractor;

    fn order(id: i64) -> Order {
        Order {
            id,
            date: "2024-05-01T10:00:00".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            is_delivered: false,
            contractor: Contractor {
                id: 1,
                name: "ООО Ромашка".to_string(),
            },
            total: 100.0,
            items: Vec::new(),
        }
    }

    #[test]
    fn removes_only_the_given_id() {
        let mut orders = vec![order(3), order(7), order(9)];
        remove_by_id(&mut orders, 7);
        assert_eq!(orders.iter().map(|o| o.id).collect::<Vec<_>>(), vec![3, 9]);
    }

    #[test]
    fn missing_id_is_a_noop() {
        let mut orders = vec![order(3), order(7), order(9)];
        remove_by_id(&mut orders, 42);
        assert_eq!(
            orders.iter().map(|o| o.id).collect::<Vec<_>>(),
            vec![3, 7, 9]
        );
    }

    #[test]
    fn empty_state_builds_empty_filter() {
        let state = OrderListState::default();
        assert!(state.filter().is_empty());
    }

    #[test]
    fn filter_parses_dates_and_keeps_status() {
        let state = OrderListState {
            date_from: "2024-01-01".to_string(),
            date_to: "не дата".to_string(),
            delivered: Some(true),
            ..OrderListState::default()
        };
        let filter = state.filter();
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.date_to, None);
        assert_eq!(filter.is_delivered, Some(true));
    }
}
