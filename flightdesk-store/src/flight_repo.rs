use async_trait::async_trait;
use chrono::Utc;
use flightdesk_core::{CoreError, CoreResult, Flight, FlightId, FlightPayload, FlightRepository};
use sqlx::PgPool;

pub struct PostgresFlightRepository {
    pool: PgPool,
}

impl PostgresFlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct FlightRow {
    id: i32,
    destination_from: String,
    destination_to: String,
    delete_at: i64,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            flight_id: FlightId::from(row.id),
            destination_from: row.destination_from,
            destination_to: row.destination_to,
            delete_at: row.delete_at,
        }
    }
}

const COLUMNS: &str = "id, destination_from, destination_to, delete_at";

fn store_error(op: &str, err: sqlx::Error) -> CoreError {
    tracing::error!("flights {} failed: {}", op, err);
    CoreError::Store(err.to_string())
}

// `id` is a SERIAL column; anything wider can never match a row.
fn row_id(id: FlightId) -> CoreResult<i32> {
    i32::try_from(id).map_err(|_| CoreError::NotFound(id))
}

#[async_trait]
impl FlightRepository for PostgresFlightRepository {
    async fn insert(&self, payload: &FlightPayload) -> CoreResult<Flight> {
        let row = sqlx::query_as::<_, FlightRow>(&format!(
            "INSERT INTO flights (destination_from, destination_to) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(&payload.destination_from)
        .bind(&payload.destination_to)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("insert", e))?;

        tracing::info!("Flight {} created", row.id);
        Ok(row.into())
    }

    async fn get_by_id(&self, id: FlightId) -> CoreResult<Flight> {
        let row = sqlx::query_as::<_, FlightRow>(&format!(
            "SELECT {COLUMNS} FROM flights WHERE id = $1 AND delete_at = 0"
        ))
        .bind(row_id(id)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("get", e))?;

        row.map(Flight::from).ok_or(CoreError::NotFound(id))
    }

    async fn list_active(&self) -> CoreResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightRow>(&format!(
            "SELECT {COLUMNS} FROM flights WHERE delete_at = 0 ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("list", e))?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn update(&self, id: FlightId, payload: &FlightPayload) -> CoreResult<Flight> {
        let row = sqlx::query_as::<_, FlightRow>(&format!(
            "UPDATE flights SET destination_from = $2, destination_to = $3 \
             WHERE id = $1 AND delete_at = 0 RETURNING {COLUMNS}"
        ))
        .bind(row_id(id)?)
        .bind(&payload.destination_from)
        .bind(&payload.destination_to)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("update", e))?;

        match row {
            Some(row) => {
                tracing::info!("Flight {} updated", id);
                Ok(row.into())
            }
            None => Err(CoreError::NotFound(id)),
        }
    }

    async fn soft_delete(&self, id: FlightId) -> CoreResult<()> {
        let result = sqlx::query("UPDATE flights SET delete_at = $2 WHERE id = $1 AND delete_at = 0")
            .bind(row_id(id)?)
            .bind(Utc::now().timestamp())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id));
        }

        tracing::info!("Flight {} soft-deleted", id);
        Ok(())
    }

    async fn list_by_origin(&self, city: &str) -> CoreResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightRow>(&format!(
            "SELECT {COLUMNS} FROM flights WHERE destination_from = $1 AND delete_at = 0 ORDER BY id"
        ))
        .bind(city)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("list by origin", e))?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }
}
