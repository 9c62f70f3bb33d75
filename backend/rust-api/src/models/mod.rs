//! Wire and domain types: skills, swap requests, profiles. ID aliases live in `ids`.

pub mod ids;
pub mod profile;
pub mod skill;
pub mod swap_request;

pub use ids::{SkillId, SwapRequestId, UserId};
pub use profile::{DirectoryEntry, Profile, ProfilePatch};
pub use skill::Skill;
pub use swap_request::{NewSwapRequest, SwapRequest, SwapStatus};
