//! PostgreSQL store for tenants.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::tenants::Tenant,
};
use crate::types::TenantId;
use sqlx::PgPool;
use tracing::instrument;

pub struct Tenants {
    pool: PgPool,
}

impl Tenants {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Repository for Tenants {
    type Record = Tenant;
    type Id = TenantId;

    #[instrument(skip(self), err)]
    async fn get(&self, id: TenantId) -> Result<Option<Tenant>> {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenant WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Tenant>> {
        let tenants = sqlx::query_as::<_, Tenant>("SELECT * FROM tenant ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(tenants)
    }

    #[instrument(skip(self), err)]
    async fn exists(&self, id: TenantId) -> Result<bool> {
        let present = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM tenant WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(present)
    }

    #[instrument(skip(self, record), fields(tenant_id = ?record.id), err)]
    async fn save(&self, record: &Tenant) -> Result<Tenant> {
        let saved = match record.id {
            None => {
                sqlx::query_as::<_, Tenant>(
                    r#"
                    INSERT INTO tenant (name, created_at, created_by, last_updated_at, last_update_by)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING *
                    "#,
                )
                .bind(&record.name)
                .bind(record.created_at)
                .bind(record.created_by)
                .bind(record.last_updated_at)
                .bind(record.last_update_by)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, Tenant>(
                r#"
                UPDATE tenant SET
                    name = $2,
                    created_at = $3,
                    created_by = $4,
                    last_updated_at = $5,
                    last_update_by = $6
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(&record.name)
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
    async fn delete(&self, id: TenantId) -> Result<()> {
        sqlx::query("DELETE FROM tenant WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
