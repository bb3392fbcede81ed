//! In-memory implementation of [`ActivityRepository`].

use std::future::Future;
use std::sync::RwLock;

use mergington_app::ports::ActivityRepository;
use mergington_domain::activity::Activity;
use mergington_domain::error::{MergingtonError, NotFoundError};

use crate::error::StorageError;

/// Activity records held behind a read-write lock.
///
/// Records are kept in a `Vec` so listing preserves seed order.
#[derive(Debug)]
pub struct InMemoryActivityRepository {
    store: RwLock<Vec<Activity>>,
}

impl InMemoryActivityRepository {
    /// Build a repository holding `activities`.
    ///
    /// When two seeds share a name the first one wins.
    #[must_use]
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut store: Vec<Activity> = Vec::new();
        for activity in activities {
            if store.iter().any(|a| a.name == activity.name) {
                tracing::warn!(activity = %activity.name, "duplicate seed activity ignored");
                continue;
            }
            store.push(activity);
        }
        tracing::debug!(count = store.len(), "activity store seeded");
        Self {
            store: RwLock::new(store),
        }
    }

    fn read_all(&self) -> Result<Vec<Activity>, MergingtonError> {
        let store = self.store.read().map_err(|_| StorageError::Poisoned)?;
        Ok(store.clone())
    }

    fn read_one(&self, name: &str) -> Result<Option<Activity>, MergingtonError> {
        let store = self.store.read().map_err(|_| StorageError::Poisoned)?;
        Ok(store.iter().find(|a| a.name == name).cloned())
    }

    fn write_one(&self, activity: Activity) -> Result<Activity, MergingtonError> {
        let mut store = self.store.write().map_err(|_| StorageError::Poisoned)?;
        let Some(slot) = store.iter_mut().find(|a| a.name == activity.name) else {
            return Err(NotFoundError {
                entity: "Activity",
                key: activity.name,
            }
            .into());
        };
        slot.clone_from(&activity);
        Ok(activity)
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Activity>, MergingtonError>> + Send {
        let result = self.read_all();
        async { result }
    }

    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Activity>, MergingtonError>> + Send {
        let result = self.read_one(name);
        async { result }
    }

    fn update(
        &self,
        activity: Activity,
    ) -> impl Future<Output = Result<Activity, MergingtonError>> + Send {
        let result = self.write_one(activity);
        async { result }
    }
}
