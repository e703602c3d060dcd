//! Favorite endpoints

use shared::models::Favorite;

use crate::{ClientResult, HttpClient};

/// Fetch the current user's bookmarked restaurants
pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<Favorite>> {
    client.get("/api/favorites").await
}

/// Bookmark a restaurant
pub async fn add<C: HttpClient + ?Sized>(client: &C, restaurant_id: &str) -> ClientResult<()> {
    client
        .post_unit(&format!("/api/favorites/{restaurant_id}"))
        .await
}

/// Remove a bookmark
pub async fn remove<C: HttpClient + ?Sized>(client: &C, restaurant_id: &str) -> ClientResult<()> {
    client
        .delete(&format!("/api/favorites/{restaurant_id}"))
        .await
}
