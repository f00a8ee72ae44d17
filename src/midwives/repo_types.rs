use serde::Serialize;
use sqlx::postgres::PgRow;
use time::OffsetDateTime;

use crate::error::StoreError;
use crate::records::{field, Record};

/// Midwife record in the database.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Midwife {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

impl Record for Midwife {
    const ENTITY: &'static str = "midwife";
    const TABLE: &'static str = "midwife";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "email",
        "password_hash",
        "image_url",
        "created_at",
        "updated_at",
    ];

    fn from_fields(row: &PgRow) -> Result<Self, StoreError> {
        Ok(Self {
            id: field(row, "id")?,
            first_name: field(row, "first_name")?,
            last_name: field(row, "last_name")?,
            email: field(row, "email")?,
            password_hash: field(row, "password_hash")?,
            image_url: field(row, "image_url")?,
            created_at: field(row, "created_at")?,
            updated_at: field(row, "updated_at")?,
        })
    }
}

/// Validated insert payload; optional columns already encoded.
#[derive(Debug, Clone)]
pub struct NewMidwife {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub image_url: Option<String>,
}
