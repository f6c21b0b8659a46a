use crate::shared::api_utils::api_url;
use contracts::domain::order::aggregate::Order;
use contracts::domain::order::draft::SaveOrderRequest;
use contracts::domain::order::filter::OrderListFilter;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Таймер, обрывающий запрос без ответа. Живёт, пока идёт await;
/// после получения ответа дроп снимает таймер. Сработавший abort
/// превращается в сетевую ошибку у `send()`.
struct RequestTimeout {
    _timer: Timeout,
    signal: AbortSignal,
}

fn request_timeout() -> Option<RequestTimeout> {
    let controller = AbortController::new().ok()?;
    let signal = controller.signal();
    let timer = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
    Some(RequestTimeout {
        _timer: timer,
        signal,
    })
}

/// Строка запроса для выборки заказов. Незаданные поля фильтра
/// не попадают в параметры.
pub fn list_query(filter: &OrderListFilter) -> String {
    match serde_qs::to_string(filter) {
        Ok(qs) if !qs.is_empty() => format!("?{}", qs),
        _ => String::new(),
    }
}

pub async fn fetch_orders(filter: &OrderListFilter) -> Result<Vec<Order>, String> {
    let url = format!("{}{}", api_url("/api/orders"), list_query(filter));

    let timeout = request_timeout();
    let mut request = Request::get(&url);
    if let Some(t) = &timeout {
        request = request.abort_signal(Some(&t.signal));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;

    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Ошибка парсинга: {}", e))
}

pub async fn create_order(req: &SaveOrderRequest) -> Result<Order, String> {
    let response = Request::post(&api_url("/api/orders"))
        .json(req)
        .map_err(|e| format!("Ошибка сериализации: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;

    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Ошибка парсинга: {}", e))
}

pub async fn update_order(id: i64, req: &SaveOrderRequest) -> Result<Order, String> {
    let response = Request::put(&api_url(&format!("/api/orders/{}", id)))
        .json(req)
        .map_err(|e| format!("Ошибка сериализации: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;

    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Ошибка парсинга: {}", e))
}

pub async fn delete_order(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/orders/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;

    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }
    Ok(())
}

pub fn pdf_url(id: i64) -> String {
    api_url(&format!("/api/orders/{}/pdf", id))
}

/// Печатная форма заказа: открывается в новой вкладке, состояние
/// списка не меняется.
pub fn open_pdf(id: i64) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&pdf_url(id), "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn full_filter_serializes_all_three_params() {
        let filter = OrderListFilter {
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_to: NaiveDate::from_ymd_opt(2024, 1, 31),
            is_delivered: Some(true),
        };
        assert_eq!(
            list_query(&filter),
            "?date_from=2024-01-01&date_to=2024-01-31&is_delivered=true"
        );
    }

    #[test]
    fn empty_filter_serializes_to_no_params() {
        assert_eq!(list_query(&OrderListFilter::default()), "");
    }

    #[test]
    fn partial_filter_omits_unset_params() {
        let filter = OrderListFilter {
            date_from: None,
            date_to: None,
            is_delivered: Some(false),
        };
        assert_eq!(list_query(&filter), "?is_delivered=false");

        let filter = OrderListFilter {
            date_from: NaiveDate::from_ymd_opt(2024, 6, 1),
            date_to: None,
            is_delivered: None,
        };
        assert_eq!(list_query(&filter), "?date_from=2024-06-01");
    }
}
