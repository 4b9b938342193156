//! PostgreSQL store for employees.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::emps::Emp,
};
use crate::types::EmpId;
use sqlx::PgPool;
use tracing::instrument;

pub struct Emps {
    pool: PgPool,
}

impl Emps {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Repository for Emps {
    type Record = Emp;
    type Id = EmpId;

    #[instrument(skip(self), err)]
    async fn get(&self, id: EmpId) -> Result<Option<Emp>> {
        let emp = sqlx::query_as::<_, Emp>("SELECT * FROM emp WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(emp)
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Emp>> {
        let emps = sqlx::query_as::<_, Emp>("SELECT * FROM emp ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(emps)
    }

    #[instrument(skip(self), err)]
    async fn exists(&self, id: EmpId) -> Result<bool> {
        let present = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM emp WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(present)
    }

    #[instrument(skip(self, record), fields(emp_id = ?record.id), err)]
    async fn save(&self, record: &Emp) -> Result<Emp> {
        let saved = match record.id {
            None => {
                sqlx::query_as::<_, Emp>(
                    r#"
                    INSERT INTO emp (name, org_id, num, id_num, gender, dob, tenant_id,
                                     created_at, created_by, last_updated_at, last_update_by)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    RETURNING *
                    "#,
                )
                .bind(&record.name)
                .bind(record.org_id)
                .bind(&record.num)
                .bind(&record.id_num)
                .bind(record.gender)
                .bind(record.dob)
                .bind(record.tenant_id)
                .bind(record.created_at)
                .bind(record.created_by)
                .bind(record.last_updated_at)
                .bind(record.last_update_by)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, Emp>(
                r#"
                UPDATE emp SET
                    name = $2,
                    org_id = $3,
                    num = $4,
                    id_num = $5,
                    gender = $6,
                    dob = $7,
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
            .bind(&record.name)
            .bind(record.org_id)
            .bind(&record.num)
            .bind(&record.id_num)
            .bind(record.gender)
            .bind(record.dob)
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
    async fn delete(&self, id: EmpId) -> Result<()> {
        sqlx::query("DELETE FROM emp WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
