use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{DirectoryEntry, Profile, ProfilePatch, UserId};
use crate::AppState;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: UserId,
    pub path: String,
    /// `null` until the user saves for the first time.
    pub profile: Option<Profile>,
}

#[derive(Serialize)]
pub struct SaveProfileResponse {
    pub message: String,
    pub id: UserId,
    pub path: String,
    pub profile: Profile,
}

pub async fn get_profile(
    Path(user_id): Path<UserId>,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state.profiles.get_profile(&user_id).await?;

    Ok(Json(ProfileResponse {
        path: state.profiles.document_path(&user_id),
        id: user_id,
        profile,
    }))
}

// Merge-write: only the fields present in the body change
pub async fn save_profile(
    Path(user_id): Path<UserId>,
    State(state): State<AppState>,
    payload: Result<Json<ProfilePatch>, JsonRejection>,
) -> Result<Json<SaveProfileResponse>, ApiError> {
    let Json(patch) = payload?;
    let profile = state.profiles.save_profile(&user_id, patch).await?;

    Ok(Json(SaveProfileResponse {
        message: "Profile saved".to_string(),
        path: state.profiles.document_path(&user_id),
        id: user_id,
        profile,
    }))
}

// Public directory, sorted by name
pub async fn list_public_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<DirectoryEntry>>, ApiError> {
    Ok(Json(state.profiles.list_public_profiles().await?))
}
