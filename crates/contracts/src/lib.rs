pub mod domain;

pub use domain::order::draft::ValidationError;
