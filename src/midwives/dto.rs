use serde::Deserialize;

/// Request body for midwife creation. Missing fields decode as empty and are
/// rejected by validation with a specific message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateMidwifeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}
