use crate::shared::api_utils::api_url;
use contracts::domain::contractor::aggregate::Contractor;
use gloo_net::http::Request;

/// Справочник контрагентов для выбора в форме заказа.
pub async fn fetch_contractors() -> Result<Vec<Contractor>, String> {
    let response = Request::get(&api_url("/api/contractors"))
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
