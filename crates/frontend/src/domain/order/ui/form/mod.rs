//! Форма заказа (создание и редактирование)
//!
//! Упрощённый MVVM:
//! - model.rs: API-вызовы (загрузка, запись)
//! - view_model.rs: состояние формы и команды
//! - view.rs: Leptos-компонент (чистый UI)

mod model;
mod view;
mod view_model;

pub use view::OrderForm;
pub use view_model::OrderFormViewModel;
