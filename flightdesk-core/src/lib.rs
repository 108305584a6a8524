pub mod flight;
pub mod repository;

pub use flight::{parse_flight_id, Flight, FlightId, FlightPayload};
pub use repository::FlightRepository;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
    #[error("Flight {0} not found")]
    NotFound(FlightId),
    #[error("Store failure: {0}")]
    Store(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
