mod dto;
mod handlers;
mod repo;

pub use dto::{Employee, MaterialAssignment};
pub use repo::EmployeeRow;

use axum::routing::get;
use axum::Router;

use crate::db::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route("/employees/:key", get(handlers::get_employee))
}
