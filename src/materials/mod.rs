mod dto;
mod handlers;
mod repo;

pub use repo::Material;

use axum::routing::get;
use axum::Router;

use crate::db::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/materials",
        get(handlers::list_materials).post(handlers::create_material),
    )
}
