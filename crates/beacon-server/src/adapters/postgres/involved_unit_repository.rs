//! PostgreSQL implementation of InvolvedUnitRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use beacon::{DomainError, InvolvedUnit, InvolvedUnitRepository, Page};

use super::classify_sqlx_error;

/// PostgreSQL implementation of InvolvedUnitRepository
pub struct PgInvolvedUnitRepository {
    pool: PgPool,
}

impl PgInvolvedUnitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn require_call(&self, call_id: Uuid) -> Result<(), DomainError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM calls WHERE id = $1)")
                .bind(call_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        if exists {
            Ok(())
        } else {
            Err(DomainError::not_found("Call", call_id))
        }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct InvolvedUnitRow {
    id: Uuid,
    call_id: Uuid,
    unit_number: String,
    officer_name: Option<String>,
    assigned_at: chrono::DateTime<chrono::Utc>,
}

impl From<InvolvedUnitRow> for InvolvedUnit {
    fn from(row: InvolvedUnitRow) -> Self {
        Self {
            id: row.id,
            call_id: row.call_id,
            unit_number: row.unit_number,
            officer_name: row.officer_name,
            assigned_at: row.assigned_at,
        }
    }
}

#[async_trait]
impl InvolvedUnitRepository for PgInvolvedUnitRepository {
    async fn add(&self, call_id: Uuid, unit: &InvolvedUnit) -> Result<InvolvedUnit, DomainError> {
        self.require_call(call_id).await?;

        let row = sqlx::query_as::<_, InvolvedUnitRow>(
            r#"
            INSERT INTO involved_units (id, call_id, unit_number, officer_name, assigned_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, call_id, unit_number, officer_name, assigned_at
            "#,
        )
        .bind(unit.id)
        .bind(call_id)
        .bind(&unit.unit_number)
        .bind(&unit.officer_name)
        .bind(unit.assigned_at)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_sqlx_error)?;

        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        call_id: Uuid,
        unit_id: Uuid,
    ) -> Result<Option<InvolvedUnit>, DomainError> {
        let row = sqlx::query_as::<_, InvolvedUnitRow>(
            r#"
            SELECT id, call_id, unit_number, officer_name, assigned_at
            FROM involved_units
            WHERE call_id = $1 AND id = $2
            "#,
        )
        .bind(call_id)
        .bind(unit_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        call_id: Uuid,
        page: u32,
        page_size: u32,
    ) -> Result<Page<InvolvedUnit>, DomainError> {
        self.require_call(call_id).await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM involved_units WHERE call_id = $1",
        )
        .bind(call_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        let offset = i64::from(page.max(1) - 1) * i64::from(page_size);
        let rows = sqlx::query_as::<_, InvolvedUnitRow>(
            r#"
            SELECT id, call_id, unit_number, officer_name, assigned_at
            FROM involved_units
            WHERE call_id = $1
            ORDER BY seq
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(call_id)
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(Page {
            items: rows.into_iter().map(Into::into).collect(),
            page,
            page_size,
            total: total as u64,
        })
    }

    async fn update(
        &self,
        call_id: Uuid,
        unit: &InvolvedUnit,
    ) -> Result<InvolvedUnit, DomainError> {
        let row = sqlx::query_as::<_, InvolvedUnitRow>(
            r#"
            UPDATE involved_units
            SET unit_number = $3, officer_name = $4
            WHERE call_id = $1 AND id = $2
            RETURNING id, call_id, unit_number, officer_name, assigned_at
            "#,
        )
        .bind(call_id)
        .bind(unit.id)
        .bind(&unit.unit_number)
        .bind(&unit.officer_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify_sqlx_error)?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found("InvolvedUnit", unit.id))
    }
}
