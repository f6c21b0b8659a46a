pub mod aggregate;
pub mod draft;
pub mod filter;
