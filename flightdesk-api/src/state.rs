use std::sync::Arc;
use flightdesk_core::FlightRepository;

#[derive(Clone)]
pub struct AppState {
    pub flights: Arc<dyn FlightRepository>,
}

impl AppState {
    pub fn new(flights: Arc<dyn FlightRepository>) -> Self {
        Self { flights }
    }
}
