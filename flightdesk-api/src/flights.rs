use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use flightdesk_core::{parse_flight_id, CoreError, Flight, FlightId, FlightPayload};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub message: &'static str,
    pub flight: Flight,
}

#[derive(Debug, Serialize)]
pub struct FlightListResponse {
    pub message: &'static str,
    pub flights: Vec<Flight>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub id: FlightId,
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/flights", post(create_flight).get(list_flights_by_city))
        // Older clients post to the singular path
        .route("/flight", post(create_flight))
        .route("/flights/all", get(list_flights))
        .route(
            "/flights/{id}",
            get(get_flight).put(update_flight).delete(delete_flight),
        )
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /flights
async fn create_flight(
    State(state): State<AppState>,
    payload: Result<Json<FlightPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<FlightResponse>), AppError> {
    let Json(payload) = payload?;
    let payload = payload.validate()?;

    let flight = state.flights.insert(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(FlightResponse { message: "Flight created", flight }),
    ))
}

/// GET /flights/{id}
async fn get_flight(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<FlightResponse>, AppError> {
    let id = parse_flight_id(&raw_id)?;
    let flight = state.flights.get_by_id(id).await?;

    Ok(Json(FlightResponse { message: "Flight details", flight }))
}

/// GET /flights/all
async fn list_flights(State(state): State<AppState>) -> Result<Json<FlightListResponse>, AppError> {
    let flights = state.flights.list_active().await?;
    tracing::debug!("Listing {} active flights", flights.len());

    Ok(Json(FlightListResponse { message: "All flights", flights }))
}

/// PUT /flights/{id}
async fn update_flight(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<FlightPayload>, JsonRejection>,
) -> Result<Json<FlightResponse>, AppError> {
    let id = parse_flight_id(&raw_id)?;
    let Json(payload) = payload?;
    let payload = payload.validate()?;

    let flight = state.flights.update(id, &payload).await?;

    Ok(Json(FlightResponse { message: "Flight updated", flight }))
}

/// DELETE /flights/{id}
async fn delete_flight(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_flight_id(&raw_id)?;

    state.flights.soft_delete(id).await.map_err(|e| match e {
        CoreError::NotFound(_) => {
            AppError::NotFoundError("Flight not found or already deleted".to_string())
        }
        other => other.into(),
    })?;

    Ok(Json(DeleteResponse { message: "Flight deleted", id }))
}

/// GET /flights?city=X
async fn list_flights_by_city(
    State(state): State<AppState>,
    query: Result<Query<CityQuery>, QueryRejection>,
) -> Result<Json<FlightListResponse>, AppError> {
    let Query(query) = query?;
    let city = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::ValidationError("City parameter is required".to_string()))?;

    let flights = state.flights.list_by_origin(city).await?;
    tracing::debug!("Found {} active flights from {}", flights.len(), city);

    Ok(Json(FlightListResponse { message: "Flights found", flights }))
}
