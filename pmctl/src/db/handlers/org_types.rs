//! PostgreSQL store for organization types.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::org_types::OrgType,
};
use crate::types::OrgTypeId;
use sqlx::PgPool;
use tracing::instrument;

pub struct OrgTypes {
    pool: PgPool,
}

impl OrgTypes {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Repository for OrgTypes {
    type Record = OrgType;
    type Id = OrgTypeId;

    #[instrument(skip(self), err)]
    async fn get(&self, id: OrgTypeId) -> Result<Option<OrgType>> {
        let org_type = sqlx::query_as::<_, OrgType>("SELECT * FROM org_type WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(org_type)
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<OrgType>> {
        let org_types = sqlx::query_as::<_, OrgType>("SELECT * FROM org_type ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(org_types)
    }

    #[instrument(skip(self), err)]
    async fn exists(&self, id: OrgTypeId) -> Result<bool> {
        let present = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM org_type WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(present)
    }

    #[instrument(skip(self, record), fields(org_type_id = ?record.id), err)]
    async fn save(&self, record: &OrgType) -> Result<OrgType> {
        let saved = match record.id {
            None => {
                sqlx::query_as::<_, OrgType>(
                    r#"
                    INSERT INTO org_type (name, tenant_id, created_at, created_by, last_updated_at, last_update_by)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING *
                    "#,
                )
                .bind(&record.name)
                .bind(record.tenant_id)
                .bind(record.created_at)
                .bind(record.created_by)
                .bind(record.last_updated_at)
                .bind(record.last_update_by)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, OrgType>(
                r#"
                UPDATE org_type SET
                    name = $2,
                    tenant_id = $3,
                    created_at = $4,
                    created_by = $5,
                    last_updated_at = $6,
                    last_update_by = $7
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(&record.name)
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
    async fn delete(&self, id: OrgTypeId) -> Result<()> {
        sqlx::query("DELETE FROM org_type WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
