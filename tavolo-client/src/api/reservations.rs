//! Reservation endpoints

use std::collections::HashSet;

use serde::Deserialize;

use shared::floorplan::{TimeWindow, reserved_table_ids};
use shared::models::{Reservation, ReservationCreate, ReservationDecision};

use crate::{ClientResult, HttpClient};

/// Reserved-tables response.
///
/// Some endpoints return a pre-filtered list of table ids, others the
/// full reservation history; the shape varies by backend version, so
/// both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReservedTablesResponse {
    TableIds(Vec<String>),
    Reservations(Vec<Reservation>),
}

impl ReservedTablesResponse {
    /// Normalize to the set of unavailable table ids.
    ///
    /// A pre-filtered id list is trusted as-is; a full history goes
    /// through the overlap filter client-side.
    pub fn into_table_ids(self, window: TimeWindow) -> HashSet<String> {
        match self {
            Self::TableIds(ids) => ids.into_iter().collect(),
            Self::Reservations(history) => reserved_table_ids(&history, window),
        }
    }
}

/// Fetch the tables already booked for a candidate window
pub async fn reserved_tables<C: HttpClient + ?Sized>(
    client: &C,
    restaurant_id: &str,
    window: TimeWindow,
) -> ClientResult<HashSet<String>> {
    let path = format!(
        "/api/restaurants/{restaurant_id}/reserved-tables?start={}&end={}",
        window.start.timestamp(),
        window.end.timestamp()
    );
    let response: ReservedTablesResponse = client.get(&path).await?;
    Ok(response.into_table_ids(window))
}

/// Submit a new reservation request (always `PENDING`)
pub async fn create<C: HttpClient + ?Sized>(
    client: &C,
    payload: &ReservationCreate,
) -> ClientResult<Reservation> {
    client.post("/api/reservations", payload).await
}

/// Record the operator's accept/reject decision
pub async fn decide<C: HttpClient + ?Sized>(
    client: &C,
    decision: &ReservationDecision,
) -> ClientResult<Reservation> {
    let path = format!("/api/reservations/{}/status", decision.reservation_id);
    client.put(&path, decision).await
}

/// Fetch the full reservation history for a restaurant (operator inbox)
pub async fn list_for_restaurant<C: HttpClient + ?Sized>(
    client: &C,
    restaurant_id: &str,
) -> ClientResult<Vec<Reservation>> {
    client
        .get(&format!("/api/restaurants/{restaurant_id}/reservations"))
        .await
}
