use axum::{extract::State, http::StatusCode};
use teloxide::types::Update;
use tracing::{debug, warn};

use super::AppState;
use crate::bot::handlers::inbound_from_update;

/// Accepts an update from Telegram and hands it off; the reply is sent from a
/// separate task so Telegram gets its `200` right away.
pub(super) async fn receive_update(State(state): State<AppState>, body: String) -> StatusCode {
    let update: Update = match serde_json::from_str(&body) {
        Ok(update) => update,
        Err(err) => {
            warn!(error = %err, "Malformed webhook payload");
            return StatusCode::BAD_REQUEST;
        }
    };
    match inbound_from_update(update, state.dispatcher.bot_username()) {
        Some(inbound) => state.dispatcher.spawn(inbound),
        None => debug!("Ignoring update without a command or button press"),
    }
    StatusCode::OK
}

pub(super) async fn health_check() -> &'static str {
    "OK"
}
