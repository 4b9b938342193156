//! PostgreSQL store for effort records.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::effort_records::EffortRecord,
};
use crate::types::EffortRecordId;
use sqlx::PgPool;
use tracing::instrument;

pub struct EffortRecords {
    pool: PgPool,
}

impl EffortRecords {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Repository for EffortRecords {
    type Record = EffortRecord;
    type Id = EffortRecordId;

    #[instrument(skip(self), err)]
    async fn get(&self, id: EffortRecordId) -> Result<Option<EffortRecord>> {
        let record = sqlx::query_as::<_, EffortRecord>("SELECT * FROM effort_record WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<EffortRecord>> {
        let records = sqlx::query_as::<_, EffortRecord>("SELECT * FROM effort_record ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    #[instrument(skip(self), err)]
    async fn exists(&self, id: EffortRecordId) -> Result<bool> {
        let present = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM effort_record WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(present)
    }

    #[instrument(skip(self, record), fields(effort_record_id = ?record.id), err)]
    async fn save(&self, record: &EffortRecord) -> Result<EffortRecord> {
        let saved = match record.id {
            None => {
                sqlx::query_as::<_, EffortRecord>(
                    r#"
                    INSERT INTO effort_record (effort, work_date, notes, project_id, emp_id, tenant_id,
                                               created_at, created_by, last_updated_at, last_update_by)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    RETURNING *
                    "#,
                )
                .bind(record.effort)
                .bind(record.work_date)
                .bind(&record.notes)
                .bind(record.project_id)
                .bind(record.emp_id)
                .bind(record.tenant_id)
                .bind(record.created_at)
                .bind(record.created_by)
                .bind(record.last_updated_at)
                .bind(record.last_update_by)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, EffortRecord>(
                r#"
                UPDATE effort_record SET
                    effort = $2,
                    work_date = $3,
                    notes = $4,
                    project_id = $5,
                    emp_id = $6,
                    tenant_id = $7,
                    created_at = $8,
                    created_by = $9,
                    last_updated_at = $10,
                    last_update_by = $11
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(record.effort)
            .bind(record.work_date)
            .bind(&record.notes)
            .bind(record.project_id)
            .bind(record.emp_id)
            .bind(record.tenant_id)
            .bind(record.created_at)
            .bind(record.created_by)
            .bind(record.last_updated_at)
            .bind(record.last_update_by)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound)?,
        };
        Ok(saved)
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: EffortRecordId) -> Result<()> {
        sqlx::query("DELETE FROM effort_record WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
