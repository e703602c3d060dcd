//! Menu management endpoints (operator)

use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::{ClientResult, HttpClient};

/// Fetch a restaurant's menu
pub async fn list<C: HttpClient + ?Sized>(
    client: &C,
    restaurant_id: &str,
) -> ClientResult<Vec<MenuItem>> {
    client
        .get(&format!("/api/restaurants/{restaurant_id}/menu"))
        .await
}

/// Add a menu item
pub async fn create<C: HttpClient + ?Sized>(
    client: &C,
    restaurant_id: &str,
    payload: &MenuItemCreate,
) -> ClientResult<MenuItem> {
    client
        .post(&format!("/api/restaurants/{restaurant_id}/menu"), payload)
        .await
}

/// Update a menu item
pub async fn update<C: HttpClient + ?Sized>(
    client: &C,
    item_id: &str,
    payload: &MenuItemUpdate,
) -> ClientResult<MenuItem> {
    client.put(&format!("/api/menu/{item_id}"), payload).await
}

/// Remove a menu item
pub async fn delete<C: HttpClient + ?Sized>(client: &C, item_id: &str) -> ClientResult<()> {
    client.delete(&format!("/api/menu/{item_id}")).await
}
