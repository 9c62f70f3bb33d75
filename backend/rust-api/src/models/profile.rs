use serde::{Deserialize, Serialize};

use super::UserId;

/// A user's profile document. Every field is optional because documents are
/// built up by merge-writes and a client may never have sent some of them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Free text, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_offered: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_wanted: Option<String>,
}

impl Profile {
    /// Only an explicit `isPublic: true` lists a profile in the directory.
    pub fn is_listed(&self) -> bool {
        self.is_public == Some(true)
    }

    /// Name used for directory ordering; a missing name sorts as "".
    pub fn sort_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Merge-write: fields present in `patch` overwrite, absent ones are kept.
    pub fn merge(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            name,
            location,
            profile_photo_url,
            is_public,
            skills_offered,
            skills_wanted,
        } = patch;

        if name.is_some() {
            self.name = name;
        }
        if location.is_some() {
            self.location = location;
        }
        if profile_photo_url.is_some() {
            self.profile_photo_url = profile_photo_url;
        }
        if is_public.is_some() {
            self.is_public = is_public;
        }
        if skills_offered.is_some() {
            self.skills_offered = skills_offered;
        }
        if skills_wanted.is_some() {
            self.skills_wanted = skills_wanted;
        }
    }
}

/// Body of a profile save. `null` and absent fields both mean "leave as is".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub skills_offered: Option<String>,
    #[serde(default)]
    pub skills_wanted: Option<String>,
}

/// One row of the public directory: the profile plus the id it is stored under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: UserId,
    #[serde(flatten)]
    pub profile: Profile,
}
