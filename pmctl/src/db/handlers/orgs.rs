//! PostgreSQL store for organizations.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::orgs::Org,
};
use crate::types::OrgId;
use sqlx::PgPool;
use tracing::instrument;

pub struct Orgs {
    pool: PgPool,
}

impl Orgs {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Repository for Orgs {
    type Record = Org;
    type Id = OrgId;

    #[instrument(skip(self), err)]
    async fn get(&self, id: OrgId) -> Result<Option<Org>> {
        let org = sqlx::query_as::<_, Org>("SELECT * FROM org WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(org)
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Org>> {
        let orgs = sqlx::query_as::<_, Org>("SELECT * FROM org ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(orgs)
    }

    #[instrument(skip(self), err)]
    async fn exists(&self, id: OrgId) -> Result<bool> {
        let present = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM org WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(present)
    }

    #[instrument(skip(self, record), fields(org_id = ?record.id), err)]
    async fn save(&self, record: &Org) -> Result<Org> {
        let saved = match record.id {
            None => {
                sqlx::query_as::<_, Org>(
                    r#"
                    INSERT INTO org (name, tenant_id, org_type, head_id, parent_org_id,
                                     created_at, created_by, last_updated_at, last_update_by)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    RETURNING *
                    "#,
                )
                .bind(&record.name)
                .bind(record.tenant_id)
                .bind(record.org_type)
                .bind(record.head_id)
                .bind(record.parent_org_id)
                .bind(record.created_at)
                .bind(record.created_by)
                .bind(record.last_updated_at)
                .bind(record.last_update_by)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, Org>(
                r#"
                UPDATE org SET
                    name = $2,
                    tenant_id = $3,
                    org_type = $4,
                    head_id = $5,
                    parent_org_id = $6,
                    created_at = $7,
                    created_by = $8,
                    last_updated_at = $9,
                    last_update_by = $10
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(&record.name)
            .bind(record.tenant_id)
            .bind(record.org_type)
            .bind(record.head_id)
            .bind(record.parent_org_id)
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
    async fn delete(&self, id: OrgId) -> Result<()> {
        sqlx::query("DELETE FROM org WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
