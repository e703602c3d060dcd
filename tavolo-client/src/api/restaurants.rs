//! Public restaurant endpoints

use shared::models::Restaurant;

use crate::{ClientResult, HttpClient};

/// Fetch all public restaurant records
pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<Restaurant>> {
    client.get("/api/restaurants").await
}

/// Fetch a single restaurant with its seating layout
pub async fn get<C: HttpClient + ?Sized>(client: &C, id: &str) -> ClientResult<Restaurant> {
    client.get(&format!("/api/restaurants/{id}")).await
}
