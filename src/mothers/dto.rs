use serde::Deserialize;
use time::OffsetDateTime;

/// Request body for mother creation. The short obstetric names of the first
/// API version are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateMotherRequest {
    pub first_name: String,
    pub last_name: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub birth_date: Option<OffsetDateTime>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub partner_name: Option<String>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(alias = "lmp", with = "time::serde::rfc3339::option")]
    pub last_menstrual_period: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub conception_date: Option<OffsetDateTime>,
    #[serde(alias = "sonoDate", with = "time::serde::rfc3339::option")]
    pub sonogram_date: Option<OffsetDateTime>,
    #[serde(alias = "crl")]
    pub crown_rump_length: Option<f64>,
    #[serde(alias = "crlDate", with = "time::serde::rfc3339::option")]
    pub crown_rump_length_date: Option<OffsetDateTime>,
    #[serde(alias = "edd", with = "time::serde::rfc3339::option")]
    pub estimated_due_date: Option<OffsetDateTime>,
    pub rh_factor: Option<String>,
    pub delivered: Option<bool>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub delivery_date: Option<OffsetDateTime>,
    #[serde(rename = "midwifeID")]
    pub midwife_id: Option<i64>,
}
