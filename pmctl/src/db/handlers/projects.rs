//! PostgreSQL store for projects.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::projects::Project,
};
use crate::types::ProjectId;
use sqlx::PgPool;
use tracing::instrument;

pub struct Projects {
    pool: PgPool,
}

impl Projects {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Repository for Projects {
    type Record = Project;
    type Id = ProjectId;

    #[instrument(skip(self), err)]
    async fn get(&self, id: ProjectId) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM project WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(project)
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>("SELECT * FROM project ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(projects)
    }

    #[instrument(skip(self), err)]
    async fn exists(&self, id: ProjectId) -> Result<bool> {
        let present = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM project WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(present)
    }

    #[instrument(skip(self, record), fields(project_id = ?record.id), err)]
    async fn save(&self, record: &Project) -> Result<Project> {
        let saved = match record.id {
            None => {
                sqlx::query_as::<_, Project>(
                    r#"
                    INSERT INTO project (num, name, status, mng_id, contract_id, tenant_id,
                                         created_at, created_by, last_updated_at, last_update_by)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    RETURNING *
                    "#,
                )
                .bind(&record.num)
                .bind(&record.name)
                .bind(&record.status)
                .bind(record.mng_id)
                .bind(record.contract_id)
                .bind(record.tenant_id)
                .bind(record.created_at)
                .bind(record.created_by)
                .bind(record.last_updated_at)
                .bind(record.last_update_by)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, Project>(
                r#"
                UPDATE project SET
                    num = $2,
                    name = $3,
                    status = $4,
                    mng_id = $5,
                    contract_id = $6,
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
            .bind(&record.num)
            .bind(&record.name)
            .bind(&record.status)
            .bind(record.mng_id)
            .bind(record.contract_id)
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
    async fn delete(&self, id: ProjectId) -> Result<()> {
        sqlx::query("DELETE FROM project WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
