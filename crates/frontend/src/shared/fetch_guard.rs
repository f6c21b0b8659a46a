//! Защита от устаревших ответов при перезапросе списка.
//!
//! Бэкенд не даёт отменить запрос, поэтому при смене фильтров во время
//! загрузки поздний ответ старого запроса надо отбросить на клиенте.
//! Каждый запрос берёт билет; применяется только ответ с актуальным
//! билетом.

use std::cell::Cell;

#[derive(Debug, Clone, Default)]
pub struct FetchSequence {
    latest: Cell<u64>,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начать новый запрос. Все ранее выданные билеты устаревают.
    pub fn begin(&self) -> u64 {
        self.latest.set(self.latest.get() + 1);
        self.latest.get()
    }

    /// Актуален ли билет: `false` означает, что ответ пришёл
    /// от уже вытесненного запроса и его результат надо отбросить.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_request_is_current() {
        let seq = FetchSequence::new();
        let ticket = seq.begin();
        assert!(seq.is_current(ticket));
    }

    #[test]
    fn newer_request_supersedes_older() {
        // Запрос A в полёте, пользователь меняет фильтр — уходит запрос B.
        // A разрешается позже B: его билет уже не актуален.
        let seq = FetchSequence::new();
        let a = seq.begin();
        let b = seq.begin();
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn every_new_request_invalidates_all_prior() {
        let seq = FetchSequence::new();
        let tickets: Vec<u64> = (0..5).map(|_| seq.begin()).collect();
        let last = *tickets.last().unwrap();
        for t in &tickets[..tickets.len() - 1] {
            assert!(!seq.is_current(*t));
        }
        assert!(seq.is_current(last));
    }
}
