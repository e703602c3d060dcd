//! Grid-layout persistence endpoints
//!
//! The backend stores a restaurant floor plan as a raw 2D array of
//! [`LayoutCell`], keyed by restaurant id.

use shared::models::LayoutCell;

use crate::{ClientResult, HttpClient};

/// Fetch the stored layout grid for a restaurant
pub async fn fetch<C: HttpClient + ?Sized>(
    client: &C,
    restaurant_id: &str,
) -> ClientResult<Vec<Vec<LayoutCell>>> {
    client
        .get(&format!("/api/restaurants/{restaurant_id}/layout"))
        .await
}

/// Persist a layout grid for a restaurant
pub async fn save<C: HttpClient + ?Sized>(
    client: &C,
    restaurant_id: &str,
    cells: &[Vec<LayoutCell>],
) -> ClientResult<()> {
    let _: serde_json::Value = client
        .put(&format!("/api/restaurants/{restaurant_id}/layout"), &cells)
        .await?;
    Ok(())
}
