use async_trait::async_trait;
use chrono::Utc;
use flightdesk_core::{CoreError, CoreResult, Flight, FlightId, FlightPayload, FlightRepository};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Flight store kept in process memory.
///
/// The id sequence lives under the same lock as the records, so ids are
/// handed out strictly increasing even under concurrent inserts. Soft-deleted
/// flights stay in the map. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryFlightRepository {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    last_id: FlightId,
    flights: BTreeMap<FlightId, Flight>,
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn insert(&self, payload: &FlightPayload) -> CoreResult<Flight> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let flight = Flight {
            flight_id: inner.last_id,
            destination_from: payload.destination_from.clone(),
            destination_to: payload.destination_to.clone(),
            delete_at: 0,
        };
        inner.flights.insert(flight.flight_id, flight.clone());

        tracing::info!("Flight {} created", flight.flight_id);
        Ok(flight)
    }

    async fn get_by_id(&self, id: FlightId) -> CoreResult<Flight> {
        let inner = self.inner.read().await;
        inner
            .flights
            .get(&id)
            .filter(|f| f.is_active())
            .cloned()
            .ok_or(CoreError::NotFound(id))
    }

    async fn list_active(&self) -> CoreResult<Vec<Flight>> {
        let inner = self.inner.read().await;
        Ok(inner.flights.values().filter(|f| f.is_active()).cloned().collect())
    }

    async fn update(&self, id: FlightId, payload: &FlightPayload) -> CoreResult<Flight> {
        let mut inner = self.inner.write().await;
        let flight = inner
            .flights
            .get_mut(&id)
            .filter(|f| f.is_active())
            .ok_or(CoreError::NotFound(id))?;

        flight.destination_from = payload.destination_from.clone();
        flight.destination_to = payload.destination_to.clone();

        tracing::info!("Flight {} updated", id);
        Ok(flight.clone())
    }

    async fn soft_delete(&self, id: FlightId) -> CoreResult<()> {
        let mut inner = self.inner.write().await;
        let flight = inner
            .flights
            .get_mut(&id)
            .filter(|f| f.is_active())
            .ok_or(CoreError::NotFound(id))?;

        // Never zero, which would read as "active"
        flight.delete_at = Utc::now().timestamp().max(1);

        tracing::info!("Flight {} soft-deleted", id);
        Ok(())
    }

    async fn list_by_origin(&self, city: &str) -> CoreResult<Vec<Flight>> {
        let inner = self.inner.read().await;
        Ok(inner
            .flights
            .values()
            .filter(|f| f.is_active() && f.destination_from == city)
            .cloned()
            .collect())
    }
}
