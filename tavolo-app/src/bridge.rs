//! App bridge
//!
//! Owns the HTTP client and the session store, and exposes one method
//! per page operation. Network failures are logged here and surfaced as
//! typed errors; nothing is retried. The floor-plan transforms stay
//! pure — all I/O happens in this layer.

use std::collections::HashSet;

use shared::floorplan::{DEFAULT_GRID_SIZE, FloorGrid, TimeWindow};
use shared::models::{
    Favorite, MenuItem, MenuItemUpdate, Reservation, ReservationCreate, ReservationDecision,
    ReservationStatus, Restaurant, UserInfo,
};
use tavolo_client::HttpClient;
use tavolo_client::api::{auth, favorites, layout, menu, reservations, restaurants};

use crate::error::{AppError, AppResult};
use crate::forms::{LoginForm, MenuItemForm, RegistrationForm};
use crate::session::{SessionStore, UserSession};
use crate::view::{DashboardSection, SectionKind};

/// Everything the table-booking page needs for one restaurant
#[derive(Debug, Clone)]
pub struct FloorPage {
    pub restaurant: Restaurant,
    pub grid: FloorGrid,
}

/// Application bridge between a frontend and the reservation backend
pub struct AppBridge<C: HttpClient> {
    client: C,
    session: SessionStore,
}

impl<C: HttpClient> AppBridge<C> {
    /// Create a bridge; an unexpired persisted session is installed on
    /// the transport right away.
    pub fn new(client: C, session: SessionStore) -> Self {
        if let Some(token) = session.token() {
            client.set_token(Some(token.to_string()));
        }
        Self { client, session }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // ── Auth ────────────────────────────────────────────────────────

    pub async fn login(&mut self, username: &str, password: &str) -> AppResult<UserInfo> {
        let request = LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
        .into_request()?;

        let response = match auth::login(&self.client, &request.username, &request.password).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("login failed: {e}");
                return Err(e.into());
            }
        };

        self.client.set_token(Some(response.token.clone()));
        self.session.set(UserSession::new(
            response.token,
            response.user.clone(),
            response.expires_at,
        ))?;
        tracing::info!(username = %response.user.username, "logged in");
        Ok(response.user)
    }

    pub async fn register(&self, form: RegistrationForm) -> AppResult<UserInfo> {
        let request = form.into_request()?;
        Ok(auth::register(&self.client, &request).await?)
    }

    /// Clear the session even when the server call fails; the token is
    /// gone locally either way.
    pub async fn logout(&mut self) -> AppResult<()> {
        if let Err(e) = auth::logout(&self.client).await {
            tracing::warn!("server logout failed: {e}");
        }
        self.client.set_token(None);
        self.session.clear()?;
        Ok(())
    }

    // ── Browsing and booking ────────────────────────────────────────

    pub async fn browse_restaurants(&self) -> AppResult<Vec<Restaurant>> {
        let all = restaurants::list(&self.client).await?;
        tracing::debug!(count = all.len(), "fetched restaurants");
        Ok(all)
    }

    /// Load a restaurant and its grid with reservation state for the
    /// candidate window.
    pub async fn load_floor_page(
        &self,
        restaurant_id: &str,
        window: TimeWindow,
    ) -> AppResult<FloorPage> {
        let restaurant = restaurants::get(&self.client, restaurant_id).await?;
        let reserved = match reservations::reserved_tables(&self.client, restaurant_id, window).await
        {
            Ok(reserved) => reserved,
            Err(e) => {
                tracing::error!(restaurant_id, "failed to fetch reserved tables: {e}");
                return Err(e.into());
            }
        };
        let grid = FloorGrid::build(&restaurant.layout, DEFAULT_GRID_SIZE, &reserved);
        Ok(FloorPage { restaurant, grid })
    }

    /// Submit a reservation request for the logged-in user
    pub async fn request_reservation(
        &self,
        restaurant_id: &str,
        table_id: &str,
        window: TimeWindow,
    ) -> AppResult<Reservation> {
        let user = self.session.current().ok_or(AppError::NotAuthenticated)?;
        let payload = ReservationCreate::new(&user.user.id, restaurant_id, table_id, window);
        let created = reservations::create(&self.client, &payload).await?;
        tracing::info!(reservation_id = %created.reservation_id, "reservation requested");
        Ok(created)
    }

    // ── Operator actions ────────────────────────────────────────────

    /// Accept or reject a pending reservation.
    ///
    /// The decision is checked against the status lifecycle before it
    /// leaves the client: decided reservations are terminal.
    pub async fn decide_reservation(
        &self,
        reservation: &Reservation,
        decision: ReservationStatus,
    ) -> AppResult<Reservation> {
        if !reservation.status.can_transition_to(decision) {
            return Err(AppError::InvalidTransition {
                current: reservation.status,
                requested: decision,
            });
        }
        let payload = ReservationDecision {
            reservation_id: reservation.reservation_id.clone(),
            status: decision,
        };
        let updated = reservations::decide(&self.client, &payload).await?;
        tracing::info!(
            reservation_id = %updated.reservation_id,
            status = %updated.status,
            "reservation decided"
        );
        Ok(updated)
    }

    /// Persist the operator's floor-plan edits
    pub async fn save_layout(&self, restaurant_id: &str, grid: &FloorGrid) -> AppResult<()> {
        layout::save(&self.client, restaurant_id, &grid.to_layout()).await?;
        tracing::info!(restaurant_id, tables = grid.table_count(), "layout saved");
        Ok(())
    }

    /// Load one dashboard section with its data dependencies
    pub async fn load_section(
        &self,
        kind: SectionKind,
        restaurant_id: &str,
    ) -> AppResult<DashboardSection> {
        match kind {
            SectionKind::Menu => {
                let items = menu::list(&self.client, restaurant_id).await?;
                Ok(DashboardSection::Menu { items })
            }
            SectionKind::FloorPlan => {
                let cells = layout::fetch(&self.client, restaurant_id).await?;
                let placements = FloorGrid::placements_from_layout(&cells, DEFAULT_GRID_SIZE);
                let grid = FloorGrid::build(&placements, DEFAULT_GRID_SIZE, &HashSet::new());
                Ok(DashboardSection::FloorPlan { grid })
            }
            SectionKind::Reservations => {
                let mut pending = reservations::list_for_restaurant(&self.client, restaurant_id)
                    .await?;
                pending.retain(|r| r.status == ReservationStatus::Pending);
                Ok(DashboardSection::Reservations { pending })
            }
        }
    }

    // ── Menu management ─────────────────────────────────────────────

    pub async fn create_menu_item(
        &self,
        restaurant_id: &str,
        form: MenuItemForm,
    ) -> AppResult<MenuItem> {
        let payload = form.into_create()?;
        Ok(menu::create(&self.client, restaurant_id, &payload).await?)
    }

    pub async fn update_menu_item(
        &self,
        item_id: &str,
        payload: &MenuItemUpdate,
    ) -> AppResult<MenuItem> {
        Ok(menu::update(&self.client, item_id, payload).await?)
    }

    pub async fn delete_menu_item(&self, item_id: &str) -> AppResult<()> {
        Ok(menu::delete(&self.client, item_id).await?)
    }

    // ── Favorites ───────────────────────────────────────────────────

    pub async fn list_favorites(&self) -> AppResult<Vec<Favorite>> {
        Ok(favorites::list(&self.client).await?)
    }

    pub async fn add_favorite(&self, restaurant_id: &str) -> AppResult<()> {
        Ok(favorites::add(&self.client, restaurant_id).await?)
    }

    pub async fn remove_favorite(&self, restaurant_id: &str) -> AppResult<()> {
        Ok(favorites::remove(&self.client, restaurant_id).await?)
    }
}
