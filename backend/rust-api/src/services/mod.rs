pub mod catalog;
pub mod directory;
pub mod ledger;
pub mod profile_store;
pub mod subscription;

pub use catalog::SkillCatalog;
pub use directory::public_directory;
pub use ledger::SwapRequestLedger;
pub use profile_store::{ProfileChange, ProfileStore};
pub use subscription::Subscription;
