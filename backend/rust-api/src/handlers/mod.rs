pub mod profiles;
pub mod skills;
pub mod swap_requests;

pub use profiles::{
    get_profile,
    list_public_profiles,
    save_profile,
    ProfileResponse,
    SaveProfileResponse,
};
pub use skills::list_skills;
pub use swap_requests::{create_swap_request, list_swap_requests, CreateSwapRequestResponse};

/// Plaintext liveness string served at `/`.
pub async fn home() -> &'static str {
    "Skill Swap API Running!"
}

pub async fn health_check() -> &'static str {
    "OK"
}
