//! Форматирование денежных значений для таблиц и итогов.

/// Два знака после запятой, пробел как разделитель тысяч:
/// `1234567.891` -> `"1 234 567.89"`.
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    format!("{}{}.{}", sign, grouped, decimal_part)
}

/// Денежное значение с символом рубля: `"1 234.50 ₽"`.
pub fn format_money_rub(value: f64) -> String {
    format!("{} ₽", format_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_money(1234.5), "1 234.50");
        assert_eq!(format_money(1234567.891), "1 234 567.89");
    }

    #[test]
    fn small_and_zero_values() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(999.99), "999.99");
    }

    #[test]
    fn negative_values() {
        assert_eq!(format_money(-1234.5), "-1 234.50");
    }

    #[test]
    fn currency_suffix() {
        assert_eq!(format_money_rub(1500.0), "1 500.00 ₽");
    }
}
