//! Auth endpoints

use shared::models::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};

use crate::{ClientResult, HttpClient};

/// Log in and return the session token + profile.
///
/// The caller decides whether to install the token on the transport.
pub async fn login<C: HttpClient + ?Sized>(
    client: &C,
    username: &str,
    password: &str,
) -> ClientResult<LoginResponse> {
    let payload = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    client.post("/api/auth/login", &payload).await
}

/// Register a new account
pub async fn register<C: HttpClient + ?Sized>(
    client: &C,
    payload: &RegisterRequest,
) -> ClientResult<UserInfo> {
    client.post("/api/auth/register", payload).await
}

/// Fetch the current user's profile
pub async fn me<C: HttpClient + ?Sized>(client: &C) -> ClientResult<UserInfo> {
    client.get("/api/auth/me").await
}

/// Invalidate the session server-side
pub async fn logout<C: HttpClient + ?Sized>(client: &C) -> ClientResult<()> {
    client.post_unit("/api/auth/logout").await
}
