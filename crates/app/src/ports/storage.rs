//! Storage port — repository trait for activity records.

use std::future::Future;
use std::sync::Arc;

use mergington_domain::activity::Activity;
use mergington_domain::error::MergingtonError;

/// Storage for the activity directory, keyed by activity name.
///
/// The set of names is fixed once the repository is built: implementations
/// expose no way to add, rename, or remove an activity.
pub trait ActivityRepository {
    /// List every activity in display order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Activity>, MergingtonError>> + Send;

    /// Look up an activity by exact name (no trimming or case folding).
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Activity>, MergingtonError>> + Send;

    /// Replace the stored record that has the same name.
    ///
    /// Fails with [`MergingtonError::NotFound`] when no such record exists.
    fn update(
        &self,
        activity: Activity,
    ) -> impl Future<Output = Result<Activity, MergingtonError>> + Send;
}

impl<T: ActivityRepository + Send + Sync> ActivityRepository for Arc<T> {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Activity>, MergingtonError>> + Send {
        (**self).get_all()
    }

    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Activity>, MergingtonError>> + Send {
        (**self).get_by_name(name)
    }

    fn update(
        &self,
        activity: Activity,
    ) -> impl Future<Output = Result<Activity, MergingtonError>> + Send {
        (**self).update(activity)
    }
}
