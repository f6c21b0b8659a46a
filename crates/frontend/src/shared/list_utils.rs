//! Утилиты для табличных списков (сортировка).

use std::cmp::Ordering;

/// Trait для строк списка, поддерживающих сортировку по имени поля.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Стрелка-индикатор сортировки для заголовка колонки.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        n: i64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.n.cmp(&other.n),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn sorts_both_directions() {
        let mut rows = vec![Row { n: 2 }, Row { n: 1 }, Row { n: 3 }];
        sort_list(&mut rows, "n", true);
        assert_eq!(rows.iter().map(|r| r.n).collect::<Vec<_>>(), vec![1, 2, 3]);
        sort_list(&mut rows, "n", false);
        assert_eq!(rows.iter().map(|r| r.n).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn indicator_only_on_active_field() {
        assert_eq!(get_sort_indicator("date", "date", true), " ▲");
        assert_eq!(get_sort_indicator("date", "date", false), " ▼");
        assert_eq!(get_sort_indicator("date", "total", true), "");
    }
}
