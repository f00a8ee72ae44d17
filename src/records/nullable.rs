//! Absent/present conversion for optional columns.
//!
//! A domain value is either absent or present. On the way into storage an
//! absent value becomes `None`, which binds as SQL `NULL`. On the way out the
//! binder reads nullable columns as `Option<T>`, so `NULL` comes back absent
//! and never as a zero value.
//!
//! Empty text is treated as absent: `Some("")` and `None` store the same way.

use time::OffsetDateTime;

/// Converts a domain value into its nullable column value.
pub trait Nullable {
    type Column;

    fn into_column(self) -> Option<Self::Column>;
}

impl Nullable for Option<String> {
    type Column = String;

    fn into_column(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl Nullable for String {
    type Column = String;

    fn into_column(self) -> Option<String> {
        Some(self).into_column()
    }
}

impl Nullable for Option<OffsetDateTime> {
    type Column = OffsetDateTime;

    fn into_column(self) -> Option<OffsetDateTime> {
        self
    }
}

impl Nullable for Option<f64> {
    type Column = f64;

    fn into_column(self) -> Option<f64> {
        self
    }
}

impl Nullable for Option<i64> {
    type Column = i64;

    fn into_column(self) -> Option<i64> {
        self
    }
}

impl Nullable for Option<bool> {
    type Column = bool;

    fn into_column(self) -> Option<bool> {
        self
    }
}

pub fn optional_text(value: Option<String>) -> Option<String> {
    value.into_column()
}

pub fn optional_timestamp(value: Option<OffsetDateTime>) -> Option<OffsetDateTime> {
    value.into_column()
}

pub fn optional_number(value: Option<f64>) -> Option<f64> {
    value.into_column()
}

pub fn optional_integer(value: Option<i64>) -> Option<i64> {
    value.into_column()
}

pub fn optional_flag(value: Option<bool>) -> Option<bool> {
    value.into_column()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn empty_text_is_absent() {
        assert_eq!(optional_text(Some(String::new())), None);
        assert_eq!(optional_text(None), None);
        assert_eq!(String::new().into_column(), None);
    }

    #[test]
    fn non_empty_text_is_present() {
        assert_eq!(optional_text(Some("Rh-".into())), Some("Rh-".to_string()));
        // whitespace is kept as a value
        assert_eq!(optional_text(Some(" ".into())), Some(" ".to_string()));
    }

    #[test]
    fn present_values_pass_through_unchanged() {
        let ts = datetime!(2024-03-01 09:30 UTC);
        assert_eq!(optional_timestamp(Some(ts)), Some(ts));
        assert_eq!(optional_number(Some(4.5)), Some(4.5));
        assert_eq!(optional_integer(Some(0)), Some(0));
        assert_eq!(optional_flag(Some(false)), Some(false));
    }

    #[test]
    fn absent_values_stay_absent() {
        assert_eq!(optional_timestamp(None), None);
        assert_eq!(optional_number(None), None);
        assert_eq!(optional_integer(None), None);
        assert_eq!(optional_flag(None), None);
    }
}
