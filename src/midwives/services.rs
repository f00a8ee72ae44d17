use lazy_static::lazy_static;
use regex::Regex;

use crate::error::StoreError;
use crate::midwives::{dto::CreateMidwifeRequest, password::hash_password, repo_types::NewMidwife};
use crate::records::Nullable;

pub const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn required(value: &str, name: &str) -> Result<String, StoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StoreError::Validation(format!("{} is required", name)));
    }
    Ok(value.to_string())
}

/// Validates a create request and turns it into an insert payload with the
/// password hashed.
pub fn prepare_midwife(req: CreateMidwifeRequest) -> Result<NewMidwife, StoreError> {
    let first_name = required(&req.first_name, "firstName")?;
    let last_name = required(&req.last_name, "lastName")?;

    let email = req.email.trim().to_lowercase();
    if email.is_empty() {
        return Err(StoreError::Validation("email is required".into()));
    }
    if !is_valid_email(&email) {
        return Err(StoreError::Validation("invalid email".into()));
    }

    if req.password.is_empty() {
        return Err(StoreError::Validation("password is required".into()));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(StoreError::Validation("password too short".into()));
    }

    let password_hash = hash_password(&req.password)?;

    Ok(NewMidwife {
        first_name,
        last_name,
        email,
        password_hash,
        image_url: req.image_url.into_column(),
    })
}
