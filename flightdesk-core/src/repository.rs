use async_trait::async_trait;

use crate::flight::{Flight, FlightId, FlightPayload};
use crate::CoreResult;

/// Persistence contract for flight records.
///
/// Every "active" lookup ignores soft-deleted rows. List operations report
/// "nothing matched" as an empty vector, never as `NotFound`.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Stores a new active flight and returns it with its assigned id.
    async fn insert(&self, payload: &FlightPayload) -> CoreResult<Flight>;

    async fn get_by_id(&self, id: FlightId) -> CoreResult<Flight>;

    /// All active flights, ascending by id.
    async fn list_active(&self) -> CoreResult<Vec<Flight>>;

    /// Replaces the cities of an active flight. Id and delete marker are untouched.
    async fn update(&self, id: FlightId, payload: &FlightPayload) -> CoreResult<Flight>;

    /// Marks an active flight deleted as of now.
    async fn soft_delete(&self, id: FlightId) -> CoreResult<()>;

    /// Active flights departing from `city` (exact match on `destination_from`).
    async fn list_by_origin(&self, city: &str) -> CoreResult<Vec<Flight>>;
}
