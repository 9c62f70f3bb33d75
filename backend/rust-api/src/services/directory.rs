//! Public profile directory: what the "browse users" page shows.

use crate::models::{DirectoryEntry, Profile, UserId};

/// Keep only public profiles and order them by name, ignoring case.
///
/// Profiles without a name sort as the empty string, i.e. first. Equal names
/// fall back to the exact spelling and then to the user id so the order is
/// total.
pub fn public_directory<'a, I>(documents: I) -> Vec<DirectoryEntry>
where
    I: IntoIterator<Item = (&'a UserId, &'a Profile)>,
{
    let mut entries: Vec<DirectoryEntry> = documents
        .into_iter()
        .filter(|(_, profile)| profile.is_listed())
        .map(|(id, profile)| DirectoryEntry {
            id: id.clone(),
            profile: profile.clone(),
        })
        .collect();

    entries.sort_by_cached_key(|entry| {
        let name = entry.profile.sort_name();
        (name.to_lowercase(), name.to_string(), entry.id.clone())
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn profile(name: Option<&str>, is_public: Option<bool>) -> Profile {
        Profile {
            name: name.map(String::from),
            is_public,
            ..Default::default()
        }
    }

    #[test]
    fn excludes_private_and_unset_visibility() {
        let mut docs = BTreeMap::new();
        docs.insert("a".to_string(), profile(Some("Ann"), Some(true)));
        docs.insert("b".to_string(), profile(Some("Bob"), Some(false)));
        docs.insert("c".to_string(), profile(Some("Cid"), None));

        let ids: Vec<_> = public_directory(&docs).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn sorts_case_insensitively_with_missing_names_first() {
        let mut docs = BTreeMap::new();
        docs.insert("1".to_string(), profile(Some("charlie"), Some(true)));
        docs.insert("2".to_string(), profile(Some("Bravo"), Some(true)));
        docs.insert("3".to_string(), profile(None, Some(true)));
        docs.insert("4".to_string(), profile(Some("alpha"), Some(true)));
        docs.insert("5".to_string(), profile(Some(""), Some(true)));

        let names: Vec<_> = public_directory(&docs)
            .into_iter()
            .map(|e| e.profile.name.unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["", "", "alpha", "Bravo", "charlie"]);
    }

    #[test]
    fn empty_store_gives_empty_directory() {
        let docs: BTreeMap<UserId, Profile> = BTreeMap::new();
        assert!(public_directory(&docs).is_empty());
    }
}
