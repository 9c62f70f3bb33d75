//! Type aliases for entity IDs. Skill and swap-request ids are integers; user ids are
//! opaque strings handed to us by whatever identity provider the client used.

pub type SkillId = i64;
pub type SwapRequestId = u64;
pub type UserId = String;
