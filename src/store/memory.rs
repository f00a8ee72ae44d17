//! In-process store for router tests. Mirrors the Postgres semantics:
//! increasing ids, unique midwife email, `NotFound` on missing rows.

use std::sync::Mutex;

use axum::async_trait;
use time::OffsetDateTime;

use super::RecordStore;
use crate::error::StoreError;
use crate::midwives::{prepare_midwife, CreateMidwifeRequest, Midwife};
use crate::mothers::{prepare_mother, CreateMotherRequest, Mother};

#[derive(Default)]
struct Tables {
    next_midwife: i64,
    next_mother: i64,
    midwives: Vec<Midwife>,
    mothers: Vec<Mother>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

fn not_found(entity: &'static str, id: i64) -> StoreError {
    StoreError::NotFound { entity, id }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create_midwife(&self, req: CreateMidwifeRequest) -> Result<Midwife, StoreError> {
        let new = prepare_midwife(req)?;
        let mut t = self.tables.lock().unwrap();
        if t.midwives.iter().any(|m| m.email == new.email) {
            return Err(StoreError::Conflict("email already registered".into()));
        }
        t.next_midwife += 1;
        let midwife = Midwife {
            id: t.next_midwife,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            password_hash: new.password_hash,
            image_url: new.image_url,
            created_at: OffsetDateTime::now_utc(),
            updated_at: None,
        };
        t.midwives.push(midwife.clone());
        Ok(midwife)
    }

    async fn midwife_by_id(&self, id: i64) -> Result<Midwife, StoreError> {
        let t = self.tables.lock().unwrap();
        t.midwives
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| not_found("midwife", id))
    }

    async fn list_midwives(&self) -> Result<Vec<Midwife>, StoreError> {
        Ok(self.tables.lock().unwrap().midwives.clone())
    }

    async fn delete_midwife(&self, id: i64) -> Result<(), StoreError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.midwives.len();
        t.midwives.retain(|m| m.id != id);
        if t.midwives.len() == before {
            return Err(not_found("midwife", id));
        }
        Ok(())
    }

    async fn mothers_for_midwife(&self, midwife_id: i64) -> Result<Vec<Mother>, StoreError> {
        let t = self.tables.lock().unwrap();
        if !t.midwives.iter().any(|m| m.id == midwife_id) {
            return Err(not_found("midwife", midwife_id));
        }
        Ok(t.mothers
            .iter()
            .filter(|m| m.midwife_id == Some(midwife_id))
            .cloned()
            .collect())
    }

    async fn create_mother(&self, req: CreateMotherRequest) -> Result<Mother, StoreError> {
        let new = prepare_mother(req)?;
        let mut t = self.tables.lock().unwrap();
        t.next_mother += 1;
        let mother = Mother {
            id: t.next_mother,
            created_at: OffsetDateTime::now_utc(),
            updated_at: None,
            deleted_at: None,
            first_name: new.first_name,
            last_name: new.last_name,
            birth_date: new.birth_date,
            email: new.email,
            phone: new.phone,
            address: new.address,
            partner_name: new.partner_name,
            image_url: new.image_url,
            last_menstrual_period: new.last_menstrual_period,
            conception_date: new.conception_date,
            sonogram_date: new.sonogram_date,
            crown_rump_length: new.crown_rump_length,
            crown_rump_length_date: new.crown_rump_length_date,
            estimated_due_date: new.estimated_due_date,
            rh_factor: new.rh_factor,
            delivered: new.delivered,
            delivery_date: new.delivery_date,
            midwife_id: new.midwife_id,
        };
        t.mothers.push(mother.clone());
        Ok(mother)
    }

    async fn mother_by_id(&self, id: i64) -> Result<Mother, StoreError> {
        let t = self.tables.lock().unwrap();
        t.mothers
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| not_found("mother", id))
    }

    async fn list_mothers(&self) -> Result<Vec<Mother>, StoreError> {
        Ok(self.tables.lock().unwrap().mothers.clone())
    }

    async fn delete_mother(&self, id: i64) -> Result<(), StoreError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.mothers.len();
        t.mothers.retain(|m| m.id != id);
        if t.mothers.len() == before {
            return Err(not_found("mother", id));
        }
        Ok(())
    }
}
