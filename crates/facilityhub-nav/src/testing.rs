//! In-memory collaborators for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use facilityhub_models::{Property, PropertyId, UserId, UserProfile};

use crate::error::SourceError;
use crate::session::{ProfileSource, PropertySource, Session};

#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    profiles: Mutex<HashMap<UserId, UserProfile>>,
    properties: Mutex<HashMap<PropertyId, Property>>,
    profiles_failing: AtomicBool,
    properties_failing: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_profile(&self, profile: UserProfile) {
        lock(&self.profiles).insert(profile.id, profile);
    }

    pub fn insert_property(&self, property: Property) {
        lock(&self.properties).insert(property.id, property);
    }

    pub fn set_profiles_failing(&self, failing: bool) {
        self.profiles_failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_properties_failing(&self, failing: bool) {
        self.properties_failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProfileSource for InMemoryDirectory {
    async fn profile(&self, _session: &Session, user_id: UserId) -> Result<UserProfile, SourceError> {
        if self.profiles_failing.load(Ordering::SeqCst) {
            return Err(SourceError::Transport("profile service unavailable".into()));
        }
        lock(&self.profiles)
            .get(&user_id)
            .cloned()
            .ok_or(SourceError::NotFound { what: "profile" })
    }
}

#[async_trait]
impl PropertySource for InMemoryDirectory {
    async fn property(&self, id: PropertyId) -> Result<Property, SourceError> {
        if self.properties_failing.load(Ordering::SeqCst) {
            return Err(SourceError::Transport("property service unavailable".into()));
        }
        lock(&self.properties)
            .get(&id)
            .cloned()
            .ok_or(SourceError::NotFound { what: "property" })
    }
}
