//! In-process profile document store with push subscriptions.
//!
//! Each user id maps to one [`Profile`] document. Writes are merge-writes.
//! Every committed write bumps a store-wide revision and is announced on a
//! broadcast channel while the write lock is still held. Subscribers remember
//! the last revision they delivered and skip anything older, so after a lag
//! resync they never go back in time.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{broadcast, watch, RwLock};

use super::directory::public_directory;
use super::subscription::Subscription;
use crate::error::StoreError;
use crate::models::{DirectoryEntry, Profile, ProfilePatch, UserId};

/// A committed write: the full document after the merge.
#[derive(Clone, Debug)]
pub struct ProfileChange {
    pub revision: u64,
    pub user_id: UserId,
    pub profile: Profile,
}

#[derive(Default)]
struct Documents {
    /// Number of committed writes so far.
    revision: u64,
    profiles: BTreeMap<UserId, Profile>,
}

pub struct ProfileStore {
    app_id: String,
    documents: RwLock<Documents>,
    changes: broadcast::Sender<ProfileChange>,
    closed: watch::Sender<bool>,
}

impl ProfileStore {
    pub fn new(app_id: impl Into<String>, capacity: usize) -> Self {
        Self {
            app_id: app_id.into(),
            documents: RwLock::new(Documents::default()),
            changes: broadcast::channel(capacity.max(1)).0,
            closed: watch::channel(false).0,
        }
    }

    /// Logical location of a user's document.
    pub fn document_path(&self, user_id: &str) -> String {
        format!("artifacts/{}/public/data/users/{}", self.app_id, user_id)
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Stop accepting operations and end every live subscription.
    pub fn close(&self) {
        if !self.closed.send_replace(true) {
            tracing::info!("Profile store closed");
        }
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        self.ensure_open()?;
        check_identity(user_id)?;
        Ok(self.documents.read().await.profiles.get(user_id).cloned())
    }

    /// Merge `patch` into the user's document, creating it on first save.
    pub async fn save_profile(
        &self,
        user_id: &str,
        patch: ProfilePatch,
    ) -> Result<Profile, StoreError> {
        self.ensure_open()?;
        check_identity(user_id)?;

        let mut documents = self.documents.write().await;
        documents.revision += 1;
        let revision = documents.revision;
        let created = !documents.profiles.contains_key(user_id);
        let document = documents.profiles.entry(user_id.to_string()).or_default();
        document.merge(patch);
        let saved = document.clone();

        // No receivers is fine; nobody is watching yet.
        let _ = self.changes.send(ProfileChange {
            revision,
            user_id: user_id.to_string(),
            profile: saved.clone(),
        });

        if created {
            tracing::info!("Profile created at {}", self.document_path(user_id));
        } else {
            tracing::info!("Profile updated at {}", self.document_path(user_id));
        }
        Ok(saved)
    }

    pub async fn list_public_profiles(&self) -> Result<Vec<DirectoryEntry>, StoreError> {
        self.ensure_open()?;
        Ok(public_directory(self.documents.read().await.profiles.iter()))
    }

    /// Watch one document. `on_change` gets the current snapshot right away
    /// and then the merged document after every committed write to it.
    pub async fn subscribe_profile<F>(
        self: &Arc<Self>,
        user_id: &str,
        mut on_change: F,
    ) -> Result<Subscription, StoreError>
    where
        F: FnMut(Option<Profile>) + Send + 'static,
    {
        self.ensure_open()?;
        check_identity(user_id)?;

        // Subscribing under the read lock means no write can fall between the
        // snapshot and the first change we receive.
        let (initial, mut seen, mut changes) = {
            let documents = self.documents.read().await;
            (
                documents.profiles.get(user_id).cloned(),
                documents.revision,
                self.changes.subscribe(),
            )
        };
        let mut closed = self.closed.subscribe();
        let store = Arc::clone(self);
        let user_id = user_id.to_string();

        let task = tokio::spawn(async move {
            if *closed.borrow_and_update() {
                return;
            }
            on_change(initial);
            loop {
                tokio::select! {
                    _ = closed.changed() => break,
                    change = changes.recv() => match change {
                        Ok(change) if change.revision <= seen => {}
                        Ok(change) => {
                            seen = change.revision;
                            if change.user_id == user_id {
                                on_change(Some(change.profile));
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(
                                "Profile subscriber for {} lagged by {} changes, resyncing",
                                user_id,
                                skipped
                            );
                            let (current, revision) = {
                                let documents = store.documents.read().await;
                                (documents.profiles.get(&user_id).cloned(), documents.revision)
                            };
                            seen = revision;
                            on_change(current);
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                }
            }
            tracing::debug!("Profile subscription for {} ended", user_id);
        });

        Ok(Subscription::new(task))
    }

    /// Watch the public directory. `on_change` gets the current listing right
    /// away and a freshly filtered and sorted one after every committed write.
    pub async fn subscribe_public_profiles<F>(
        self: &Arc<Self>,
        mut on_change: F,
    ) -> Result<Subscription, StoreError>
    where
        F: FnMut(Vec<DirectoryEntry>) + Send + 'static,
    {
        self.ensure_open()?;

        let (initial, mut seen, mut changes) = {
            let documents = self.documents.read().await;
            (
                public_directory(documents.profiles.iter()),
                documents.revision,
                self.changes.subscribe(),
            )
        };
        let mut closed = self.closed.subscribe();
        let store = Arc::clone(self);

        let task = tokio::spawn(async move {
            if *closed.borrow_and_update() {
                return;
            }
            on_change(initial);
            loop {
                tokio::select! {
                    _ = closed.changed() => break,
                    change = changes.recv() => match change {
                        Ok(change) if change.revision <= seen => continue,
                        Ok(_) => {}
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!("Directory subscriber lagged by {} changes, resyncing", skipped);
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                }
                // Always rebuilt from current state, which covers every
                // change up to `revision`.
                let (listing, revision) = {
                    let documents = store.documents.read().await;
                    (public_directory(documents.profiles.iter()), documents.revision)
                };
                seen = revision;
                on_change(listing);
            }
            tracing::debug!("Directory subscription ended");
        });

        Ok(Subscription::new(task))
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.is_closed() {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

fn check_identity(user_id: &str) -> Result<(), StoreError> {
    if user_id.trim().is_empty() {
        Err(StoreError::Unauthenticated)
    } else {
        Ok(())
    }
}
