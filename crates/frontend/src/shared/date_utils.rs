//! Форматирование дат для отображения.
//!
//! Сервер отдаёт ISO-даты (yyyy-mm-dd, с опциональной частью времени);
//! пользователю показываем DD.MM.YYYY.

use chrono::Utc;

/// "2024-03-15" или "2024-03-15T14:02:26" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Сегодняшняя дата в формате yyyy-mm-dd — для атрибутов min/max
/// у `<input type="date">`.
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
    }

    #[test]
    fn strips_time_part() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn passes_through_unparsable_input() {
        assert_eq!(format_date("n/a"), "n/a");
        assert_eq!(format_date(""), "");
    }
}
