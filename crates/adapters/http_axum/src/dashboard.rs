//! Server-side rendered HTML dashboard (no JavaScript).
//!
//! Mirrors the JSON API for people with a browser: one overview page plus
//! two form targets. Forms use POST + redirect (PRG pattern) to avoid
//! double-submission.

pub mod devices;
pub mod home;

use axum::Router;
use axum::routing::{get, post};

use netinv_app::ports::DeviceRepository;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<DR>() -> Router<AppState<DR>>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<DR>))
        .route("/devices", post(devices::create::<DR>))
        .route("/devices/{id}/delete", post(devices::delete::<DR>))
}
