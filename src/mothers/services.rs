use crate::error::StoreError;
use crate::midwives::is_valid_email;
use crate::mothers::{dto::CreateMotherRequest, repo_types::NewMother};
use crate::records::nullable::{
    optional_flag, optional_integer, optional_number, optional_text, optional_timestamp,
};

/// Validates a create request and encodes its optional fields.
pub fn prepare_mother(req: CreateMotherRequest) -> Result<NewMother, StoreError> {
    let first_name = req.first_name.trim();
    if first_name.is_empty() {
        return Err(StoreError::Validation("firstName is required".into()));
    }

    let email = optional_text(req.email.map(|e| e.trim().to_lowercase()));
    if let Some(email) = &email {
        if !is_valid_email(email) {
            return Err(StoreError::Validation("invalid email".into()));
        }
    }

    let crown_rump_length = optional_number(req.crown_rump_length);
    if let Some(crl) = crown_rump_length {
        if !crl.is_finite() || crl < 0.0 {
            return Err(StoreError::Validation(
                "crownRumpLength must be a non-negative number".into(),
            ));
        }
    }

    Ok(NewMother {
        first_name: first_name.to_string(),
        last_name: optional_text(req.last_name),
        birth_date: optional_timestamp(req.birth_date),
        email,
        phone: optional_text(req.phone),
        address: optional_text(req.address),
        partner_name: optional_text(req.partner_name),
        image_url: optional_text(req.image_url),
        last_menstrual_period: optional_timestamp(req.last_menstrual_period),
        conception_date: optional_timestamp(req.conception_date),
        sonogram_date: optional_timestamp(req.sonogram_date),
        crown_rump_length,
        crown_rump_length_date: optional_timestamp(req.crown_rump_length_date),
        estimated_due_date: optional_timestamp(req.estimated_due_date),
        rh_factor: optional_text(req.rh_factor),
        delivered: optional_flag(req.delivered),
        delivery_date: optional_timestamp(req.delivery_date),
        midwife_id: optional_integer(req.midwife_id),
    })
}
