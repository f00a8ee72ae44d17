pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod midwives;
pub mod mothers;
pub mod records;
pub mod state;
pub mod store;
