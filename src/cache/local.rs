use crate::profile::types::{Profile, ProfileId};

use dashmap::DashMap;
use std::sync::Arc;

/// In-memory `ProfileId -> Profile` mapping with no implicit expiry.
///
/// Cloning shares the same underlying map.
#[derive(Clone, Default)]
pub struct LocalCache {
    profiles: Arc<DashMap<ProfileId, Profile>>,
}

impl LocalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the cached profile, if any.
    pub fn get(&self, uuid: &ProfileId) -> Option<Profile> {
        self.profiles.get(uuid).map(|entry| entry.value().clone())
    }

    /// Inserts or overwrites the entry for `profile.uuid`.
    pub fn put(&self, profile: Profile) {
        self.profiles.insert(profile.uuid, profile);
    }

    /// Removes the entry. No-op when absent.
    pub fn remove(&self, uuid: &ProfileId) -> Option<Profile> {
        self.profiles.remove(uuid).map(|(_, profile)| profile)
    }

    /// Removes the entry only while it still equals `expected`.
    ///
    /// The check and the removal happen under the same shard lock, so a
    /// newer profile cached concurrently is never evicted in its place.
    pub fn remove_if_unchanged(&self, expected: &Profile) -> bool {
        self.profiles
            .remove_if(&expected.uuid, |_, cached| cached == expected)
            .is_some()
    }

    pub fn contains(&self, uuid: &ProfileId) -> bool {
        self.profiles.contains_key(uuid)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn ids(&self) -> Vec<ProfileId> {
        self.profiles.iter().map(|entry| *entry.key()).collect()
    }

    /// Applies `f` to every cached profile in place, one shard at a time.
    pub fn update_all<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&mut Profile),
    {
        let mut updated = 0;
        for mut entry in self.profiles.iter_mut() {
            f(entry.value_mut());
            updated += 1;
        }
        updated
    }
}
