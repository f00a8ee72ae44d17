//! Mapping between entity records and relational rows.

pub mod binder;
pub mod nullable;

pub use binder::{field, Record, ROW_SHAPE};
pub use nullable::Nullable;
