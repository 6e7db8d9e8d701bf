//! Wire-schema DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase field names,
//! `ROLE_*` role strings) so serde round-trips stay lossless. Role dispatch
//! anywhere else in the app goes through the [`Role`] enum, never through
//! raw string comparison.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account kind controlling route access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Regular commuter account.
    #[serde(rename = "ROLE_COMMUTER")]
    Commuter,
    /// System administrator account.
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

/// An authenticated user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user identifier.
    pub user_id: i64,
    /// Login name; for commuters this is their email address.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Account kind.
    pub role: Role,
    /// Current wallet balance in rupees; absent for admin accounts.
    #[serde(default)]
    pub wallet_balance: Option<f64>,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful response from the login and register endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer credential for subsequent requests.
    pub token: String,
}

/// Error envelope the backend attaches to non-2xx responses when it has
/// something to say. Both fields are best-effort.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// One route alternative from `POST /routes/search`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    pub id: String,
    /// Metro line name (e.g. `"Blue Line"`).
    pub line: String,
    pub origin: String,
    pub destination: String,
    pub duration_minutes: i64,
    /// Fare in rupees.
    pub fare: f64,
    pub transfers: i64,
}

/// Ticket kind for a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Single,
    Return,
}

/// Body for `POST /tickets`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub origin: String,
    pub destination: String,
    pub ticket_type: TicketType,
}

/// Successful booking response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    /// Human-readable booking reference shown to the commuter.
    pub booking_ref: String,
    /// Fare charged against the wallet, in rupees.
    pub fare: f64,
}

/// One past journey from `GET /tickets/history`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub line: String,
    /// ISO 8601 timestamp of travel.
    pub travelled_at: String,
    pub fare: f64,
}

/// Body for `POST /wallet/topup`.
#[derive(Clone, Debug, Serialize)]
pub struct TopUpRequest {
    /// Amount to add, in rupees.
    pub amount: f64,
}

/// System metrics from `GET /admin/stats`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub active_routes: i64,
    pub daily_ridership: i64,
    /// Today's fare revenue in rupees.
    pub revenue_today: f64,
    pub open_alerts: i64,
}

/// A managed metro route from `GET /admin/routes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetroRoute {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub active: bool,
}

/// Body for `POST /admin/routes`.
#[derive(Clone, Debug, Serialize)]
pub struct NewRoute {
    pub name: String,
    pub origin: String,
    pub destination: String,
}
