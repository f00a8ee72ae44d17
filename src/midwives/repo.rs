use lazy_static::lazy_static;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::midwives::repo_types::{Midwife, NewMidwife};
use crate::mothers::Mother;
use crate::records::Record;

lazy_static! {
    static ref INSERT: String = format!(
        r#"
        INSERT INTO midwife (first_name, last_name, email, password_hash, image_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {}
        "#,
        Midwife::select_list()
    );
    static ref SELECT_BY_ID: String =
        format!("SELECT {} FROM midwife WHERE id = $1", Midwife::select_list());
    static ref SELECT_ALL: String =
        format!("SELECT {} FROM midwife ORDER BY id", Midwife::select_list());
    static ref SELECT_MOTHERS: String = format!(
        "SELECT {} FROM mother WHERE midwife_id = $1 ORDER BY id",
        Mother::select_list()
    );
}

impl Midwife {
    /// Insert a new midwife; a taken email is a conflict.
    pub async fn create(db: &PgPool, new: &NewMidwife) -> Result<Midwife, StoreError> {
        let row = sqlx::query(INSERT.as_str())
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(&new.email)
            .bind(&new.password_hash)
            .bind(&new.image_url)
            .fetch_one(db)
            .await
            .map_err(|e| match StoreError::from(e) {
                StoreError::Conflict(_) => StoreError::Conflict("email already registered".into()),
                other => other,
            })?;
        Midwife::bind(&row)
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Midwife, StoreError> {
        let row = sqlx::query(SELECT_BY_ID.as_str())
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or(StoreError::NotFound {
                entity: Midwife::ENTITY,
                id,
            })?;
        Midwife::bind(&row)
    }

    pub async fn list(db: &PgPool) -> Result<Vec<Midwife>, StoreError> {
        let rows = sqlx::query(SELECT_ALL.as_str()).fetch_all(db).await?;
        rows.iter().map(Midwife::bind).collect()
    }

    /// Hard delete; a missing row is `NotFound`.
    pub async fn delete_by_id(db: &PgPool, id: i64) -> Result<(), StoreError> {
        let done = sqlx::query("DELETE FROM midwife WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: Midwife::ENTITY,
                id,
            });
        }
        Ok(())
    }

    /// Mothers whose advisory `midwife_id` points at this midwife.
    pub async fn mothers(db: &PgPool, id: i64) -> Result<Vec<Mother>, StoreError> {
        let mut tx = db.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM midwife WHERE id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Err(StoreError::NotFound {
                entity: Midwife::ENTITY,
                id,
            });
        }

        let rows = sqlx::query(SELECT_MOTHERS.as_str())
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        rows.iter().map(Mother::bind).collect()
    }
}
