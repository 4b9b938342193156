//! PostgreSQL store for employee-post assignments.
//!
//! The composite primary key means `save` cannot use identity presence to
//! pick INSERT vs UPDATE; it switches on the record's [`RecordState`]
//! instead. Rows loaded from the database always come back `Persisted`.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::emp_posts::{EmpPost, RecordState},
};
use crate::types::EmpPostId;
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

pub struct EmpPosts {
    pool: PgPool,
}

impl EmpPosts {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape; the composite key is two columns until mapped.
#[derive(FromRow)]
struct EmpPostRow {
    emp_id: i32,
    post_id: i32,
    tenant_id: Option<i32>,
    created_at: Option<DateTime<Utc>>,
    created_by: Option<i32>,
    last_updated_at: Option<DateTime<Utc>>,
    last_update_by: Option<i32>,
}

impl From<EmpPostRow> for EmpPost {
    fn from(row: EmpPostRow) -> Self {
        EmpPost {
            id: Some(EmpPostId {
                emp_id: row.emp_id,
                post_id: row.post_id,
            }),
            tenant_id: row.tenant_id,
            created_at: row.created_at,
            created_by: row.created_by,
            last_updated_at: row.last_updated_at,
            last_update_by: row.last_update_by,
            state: RecordState::Persisted,
        }
    }
}

#[async_trait::async_trait]
impl Repository for EmpPosts {
    type Record = EmpPost;
    type Id = EmpPostId;

    #[instrument(skip(self), err)]
    async fn get(&self, id: EmpPostId) -> Result<Option<EmpPost>> {
        let row = sqlx::query_as::<_, EmpPostRow>("SELECT * FROM emp_post WHERE emp_id = $1 AND post_id = $2")
            .bind(id.emp_id)
            .bind(id.post_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(EmpPost::from))
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<EmpPost>> {
        let rows = sqlx::query_as::<_, EmpPostRow>("SELECT * FROM emp_post ORDER BY emp_id, post_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(EmpPost::from).collect())
    }

    #[instrument(skip(self), err)]
    async fn exists(&self, id: EmpPostId) -> Result<bool> {
        let present =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM emp_post WHERE emp_id = $1 AND post_id = $2)")
                .bind(id.emp_id)
                .bind(id.post_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(present)
    }

    #[instrument(skip(self, record), fields(emp_post_id = ?record.id), err)]
    async fn save(&self, record: &EmpPost) -> Result<EmpPost> {
        let id = record
            .id
            .ok_or_else(|| DbError::Other(anyhow!("emp_post record has no identity")))?;

        let row = match record.state {
            RecordState::Transient => {
                sqlx::query_as::<_, EmpPostRow>(
                    r#"
                    INSERT INTO emp_post (emp_id, post_id, tenant_id, created_at, created_by,
                                          last_updated_at, last_update_by)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING *
                    "#,
                )
                .bind(id.emp_id)
                .bind(id.post_id)
                .bind(record.tenant_id)
                .bind(record.created_at)
                .bind(record.created_by)
                .bind(record.last_updated_at)
                .bind(record.last_update_by)
                .fetch_one(&self.pool)
                .await?
            }
            RecordState::Persisted => sqlx::query_as::<_, EmpPostRow>(
                r#"
                UPDATE emp_post SET
                    tenant_id = $3,
                    created_at = $4,
                    created_by = $5,
                    last_updated_at = $6,
                    last_update_by = $7
                WHERE emp_id = $1 AND post_id = $2
                RETURNING *
                "#,
            )
            .bind(id.emp_id)
            .bind(id.post_id)
            .bind(record.tenant_id)
            .bind(record.created_at)
            .bind(record.created_by)
            .bind(record.last_updated_at)
            .bind(record.last_update_by)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound)?,
        };
        Ok(EmpPost::from(row))
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: EmpPostId) -> Result<()> {
        sqlx::query("DELETE FROM emp_post WHERE emp_id = $1 AND post_id = $2")
            .bind(id.emp_id)
            .bind(id.post_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
