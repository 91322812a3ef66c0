//! PostgreSQL implementation of CallRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use beacon::{Address, Call, CallRepository, CallStatus, Complainant, DomainError, Location};

use super::classify_sqlx_error;

/// PostgreSQL implementation of CallRepository
pub struct PgCallRepository {
    pool: PgPool,
}

impl PgCallRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CallRow {
    id: Uuid,
    call_number: i32,
    call_type_id: i32,
    origination_id: i32,
    dispatcher_id: Option<Uuid>,
    received_time: chrono::DateTime<chrono::Utc>,
    status: i16,
    location_description: String,
    address_city: Option<String>,
    address_county: Option<String>,
    address_zip_code: Option<String>,
    address_street_number: Option<String>,
    complainant_first_name: Option<String>,
    complainant_last_name: Option<String>,
}

impl TryFrom<CallRow> for Call {
    type Error = DomainError;

    fn try_from(row: CallRow) -> Result<Self, Self::Error> {
        let status = CallStatus::from_code(row.status)
            .ok_or_else(|| DomainError::Repository(format!("unknown status code {}", row.status)))?;
        let complainant = match (row.complainant_first_name, row.complainant_last_name) {
            (Some(first_name), Some(last_name)) => Some(Complainant {
                first_name,
                last_name,
            }),
            _ => None,
        };

        Ok(Self {
            id: row.id,
            call_number: row.call_number,
            call_type_id: row.call_type_id,
            origination_id: row.origination_id,
            dispatcher_id: row.dispatcher_id,
            received_time: row.received_time,
            status,
            location: Location {
                description: row.location_description,
                address: Address {
                    city: row.address_city,
                    county: row.address_county,
                    zip_code: row.address_zip_code,
                    street_number: row.address_street_number,
                },
            },
            complainant,
        })
    }
}

#[async_trait]
impl CallRepository for PgCallRepository {
    async fn add(&self, call: &Call) -> Result<Call, DomainError> {
        // Checkout is scoped to this insert; the connection returns to the
        // pool on every exit path.
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let row = sqlx::query_as::<_, CallRow>(
            r#"
            INSERT INTO calls (
                id, call_number, call_type_id, origination_id, dispatcher_id,
                received_time, status, location_description,
                address_city, address_county, address_zip_code, address_street_number,
                complainant_first_name, complainant_last_name
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(call.id)
        .bind(call.call_number)
        .bind(call.call_type_id)
        .bind(call.origination_id)
        .bind(call.dispatcher_id)
        .bind(call.received_time)
        .bind(call.status.code())
        .bind(&call.location.description)
        .bind(&call.location.address.city)
        .bind(&call.location.address.county)
        .bind(&call.location.address.zip_code)
        .bind(&call.location.address.street_number)
        .bind(call.complainant.as_ref().map(|c| c.first_name.as_str()))
        .bind(call.complainant.as_ref().map(|c| c.last_name.as_str()))
        .fetch_one(&mut *conn)
        .await
        .map_err(classify_sqlx_error)?;

        row.try_into()
    }
}
