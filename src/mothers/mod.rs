use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod repo;
mod repo_types;
mod services;

pub use dto::CreateMotherRequest;
pub use repo_types::{Mother, NewMother};
pub use services::prepare_mother;

pub fn router() -> Router<AppState> {
    handlers::mother_routes()
}
