//! Named-column binding of rows to entity records.
//!
//! Each record type declares its table and the columns it reads. SELECT lists
//! are generated from that declaration and every field is fetched by column
//! name, so column order in the table never matters.

use sqlx::{postgres::PgRow, Decode, Postgres, Row, Type};

use crate::error::StoreError;

/// `column` value of a mapping error about the row as a whole.
pub const ROW_SHAPE: &str = "<row>";

pub trait Record: Sized {
    /// Entity name used in error messages.
    const ENTITY: &'static str;
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Reads every declared column out of `row`.
    fn from_fields(row: &PgRow) -> Result<Self, StoreError>;

    /// Comma separated column list for SELECT and RETURNING clauses.
    fn select_list() -> String {
        Self::COLUMNS.join(", ")
    }

    /// Binds a row after checking it carries exactly the declared columns.
    fn bind(row: &PgRow) -> Result<Self, StoreError> {
        if row.len() != Self::COLUMNS.len() {
            return Err(StoreError::Mapping {
                column: ROW_SHAPE.to_string(),
                reason: format!(
                    "row has {} columns, {} declares {}",
                    row.len(),
                    Self::ENTITY,
                    Self::COLUMNS.len()
                ),
            });
        }
        Self::from_fields(row)
    }
}

/// Fetches one column by name, surfacing missing or mistyped columns as
/// mapping errors.
pub fn field<'r, T>(row: &'r PgRow, column: &str) -> Result<T, StoreError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(column).map_err(|e| match StoreError::from(e) {
        StoreError::Mapping { reason, .. } => StoreError::Mapping {
            column: column.to_string(),
            reason,
        },
        other => other,
    })
}
