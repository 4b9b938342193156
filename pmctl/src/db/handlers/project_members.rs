//! PostgreSQL store for project memberships.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::project_members::ProjectMember,
};
use crate::types::ProjectMemberId;
use sqlx::PgPool;
use tracing::instrument;

pub struct ProjectMembers {
    pool: PgPool,
}

impl ProjectMembers {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Repository for ProjectMembers {
    type Record = ProjectMember;
    type Id = ProjectMemberId;

    #[instrument(skip(self), err)]
    async fn get(&self, id: ProjectMemberId) -> Result<Option<ProjectMember>> {
        let member = sqlx::query_as::<_, ProjectMember>("SELECT * FROM project_member WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(member)
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<ProjectMember>> {
        let members = sqlx::query_as::<_, ProjectMember>("SELECT * FROM project_member ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(members)
    }

    #[instrument(skip(self), err)]
    async fn exists(&self, id: ProjectMemberId) -> Result<bool> {
        let present = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM project_member WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(present)
    }

    #[instrument(skip(self, record), fields(project_member_id = ?record.id), err)]
    async fn save(&self, record: &ProjectMember) -> Result<ProjectMember> {
        let saved = match record.id {
            None => {
                sqlx::query_as::<_, ProjectMember>(
                    r#"
                    INSERT INTO project_member (start_at, end_at, status, estimate_invest_ratio, emp_id,
                                                project_id, tenant_id, created_at, created_by,
                                                last_updated_at, last_update_by)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    RETURNING *
                    "#,
                )
                .bind(record.start_at)
                .bind(record.end_at)
                .bind(&record.status)
                .bind(record.estimate_invest_ratio)
                .bind(record.emp_id)
                .bind(record.project_id)
                .bind(record.tenant_id)
                .bind(record.created_at)
                .bind(record.created_by)
                .bind(record.last_updated_at)
                .bind(record.last_update_by)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, ProjectMember>(
                r#"
                UPDATE project_member SET
                    start_at = $2,
                    end_at = $3,
                    status = $4,
                    estimate_invest_ratio = $5,
                    emp_id = $6,
                    project_id = $7,
                    tenant_id = $8,
                    created_at = $9,
                    created_by = $10,
                    last_updated_at = $11,
                    last_update_by = $12
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(record.start_at)
            .bind(record.end_at)
            .bind(&record.status)
            .bind(record.estimate_invest_ratio)
            .bind(record.emp_id)
            .bind(record.project_id)
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
    async fn delete(&self, id: ProjectMemberId) -> Result<()> {
        sqlx::query("DELETE FROM project_member WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
