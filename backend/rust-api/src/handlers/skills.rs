use axum::{extract::State, response::Json};

use crate::models::Skill;
use crate::AppState;

// Full catalog, in seed order
pub async fn list_skills(State(state): State<AppState>) -> Json<Vec<Skill>> {
    tracing::debug!("Listing {} skills", state.catalog.list().len());
    Json(state.catalog.list().to_vec())
}
