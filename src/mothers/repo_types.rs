use serde::Serialize;
use sqlx::postgres::PgRow;
use time::OffsetDateTime;

use crate::error::StoreError;
use crate::records::{field, Record};

/// Mother record in the database. Absent optionals are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mother {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<OffsetDateTime>,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub last_menstrual_period: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub conception_date: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub sonogram_date: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crown_rump_length: Option<f64>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub crown_rump_length_date: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub estimated_due_date: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rh_factor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered: Option<bool>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<OffsetDateTime>,
    #[serde(rename = "midwifeID", skip_serializing_if = "Option::is_none")]
    pub midwife_id: Option<i64>,
}

impl Record for Mother {
    const ENTITY: &'static str = "mother";
    const TABLE: &'static str = "mother";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_at",
        "updated_at",
        "deleted_at",
        "first_name",
        "last_name",
        "birth_date",
        "email",
        "phone",
        "address",
        "partner_name",
        "image_url",
        "last_menstrual_period",
        "conception_date",
        "sonogram_date",
        "crown_rump_length",
        "crown_rump_length_date",
        "estimated_due_date",
        "rh_factor",
        "delivered",
        "delivery_date",
        "midwife_id",
    ];

    fn from_fields(row: &PgRow) -> Result<Self, StoreError> {
        Ok(Self {
            id: field(row, "id")?,
            created_at: field(row, "created_at")?,
            updated_at: field(row, "updated_at")?,
            deleted_at: field(row, "deleted_at")?,
            first_name: field(row, "first_name")?,
            last_name: field(row, "last_name")?,
            birth_date: field(row, "birth_date")?,
            email: field(row, "email")?,
            phone: field(row, "phone")?,
            address: field(row, "address")?,
            partner_name: field(row, "partner_name")?,
            image_url: field(row, "image_url")?,
            last_menstrual_period: field(row, "last_menstrual_period")?,
            conception_date: field(row, "conception_date")?,
            sonogram_date: field(row, "sonogram_date")?,
            crown_rump_length: field(row, "crown_rump_length")?,
            crown_rump_length_date: field(row, "crown_rump_length_date")?,
            estimated_due_date: field(row, "estimated_due_date")?,
            rh_factor: field(row, "rh_factor")?,
            delivered: field(row, "delivered")?,
            delivery_date: field(row, "delivery_date")?,
            midwife_id: field(row, "midwife_id")?,
        })
    }
}

/// Validated insert payload; every optional already passed through the codec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewMother {
    pub first_name: String,
    pub last_name: Option<String>,
    pub birth_date: Option<OffsetDateTime>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub partner_name: Option<String>,
    pub image_url: Option<String>,
    pub last_menstrual_period: Option<OffsetDateTime>,
    pub conception_date: Option<OffsetDateTime>,
    pub sonogram_date: Option<OffsetDateTime>,
    pub crown_rump_length: Option<f64>,
    pub crown_rump_length_date: Option<OffsetDateTime>,
    pub estimated_due_date: Option<OffsetDateTime>,
    pub rh_factor: Option<String>,
    pub delivered: Option<bool>,
    pub delivery_date: Option<OffsetDateTime>,
    pub midwife_id: Option<i64>,
}
