use lazy_static::lazy_static;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::mothers::repo_types::{Mother, NewMother};
use crate::records::Record;

lazy_static! {
    static ref INSERT: String = format!(
        r#"
        INSERT INTO mother (
            first_name, last_name, birth_date, email, phone, address, partner_name,
            image_url, last_menstrual_period, conception_date, sonogram_date,
            crown_rump_length, crown_rump_length_date, estimated_due_date, rh_factor,
            delivered, delivery_date, midwife_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
        RETURNING {}
        "#,
        Mother::select_list()
    );
    static ref SELECT_BY_ID: String =
        format!("SELECT {} FROM mother WHERE id = $1", Mother::select_list());
    static ref SELECT_ALL: String =
        format!("SELECT {} FROM mother ORDER BY id", Mother::select_list());
}

impl Mother {
    pub async fn create(db: &PgPool, new: &NewMother) -> Result<Mother, StoreError> {
        let row = sqlx::query(INSERT.as_str())
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(new.birth_date)
            .bind(&new.email)
            .bind(&new.phone)
            .bind(&new.address)
            .bind(&new.partner_name)
            .bind(&new.image_url)
            .bind(new.last_menstrual_period)
            .bind(new.conception_date)
            .bind(new.sonogram_date)
            .bind(new.crown_rump_length)
            .bind(new.crown_rump_length_date)
            .bind(new.estimated_due_date)
            .bind(&new.rh_factor)
            .bind(new.delivered)
            .bind(new.delivery_date)
            .bind(new.midwife_id) // advisory, never checked against midwife
            .fetch_one(db)
            .await?;
        Mother::bind(&row)
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Mother, StoreError> {
        let row = sqlx::query(SELECT_BY_ID.as_str())
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or(StoreError::NotFound {
                entity: Mother::ENTITY,
                id,
            })?;
        Mother::bind(&row)
    }

    pub async fn list(db: &PgPool) -> Result<Vec<Mother>, StoreError> {
        let rows = sqlx::query(SELECT_ALL.as_str()).fetch_all(db).await?;
        rows.iter().map(Mother::bind).collect()
    }

    /// Hard delete, `deleted_at` is not consulted.
    pub async fn delete_by_id(db: &PgPool, id: i64) -> Result<(), StoreError> {
        let done = sqlx::query("DELETE FROM mother WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: Mother::ENTITY,
                id,
            });
        }
        Ok(())
    }
}
