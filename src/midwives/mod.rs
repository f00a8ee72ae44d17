use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod password;
mod repo;
mod repo_types;
mod services;

pub use dto::CreateMidwifeRequest;
pub use repo_types::{Midwife, NewMidwife};
pub(crate) use services::is_valid_email;
pub use services::prepare_midwife;

pub fn router() -> Router<AppState> {
    handlers::midwife_routes()
}
