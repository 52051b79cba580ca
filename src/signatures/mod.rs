mod dto;
mod handlers;
mod repo;

use axum::routing::post;
use axum::Router;

use crate::db::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/signatures", post(handlers::create_signature))
}
