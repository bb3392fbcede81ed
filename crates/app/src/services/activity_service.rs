//! Activity service — list activities and manage their participants.

use tokio::sync::Mutex;

use mergington_domain::activity::{Activity, Enrollment};
use mergington_domain::email::Email;
use mergington_domain::error::{MergingtonError, NotFoundError};

use crate::ports::ActivityRepository;

/// Application service for the activity directory.
///
/// Enroll and unenroll run under a single write lock spanning
/// read, domain check, and write-back.
pub struct ActivityService<R> {
    repo: R,
    write_lock: Mutex<()>,
}

impl<R: ActivityRepository> ActivityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// List all activities in display order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, MergingtonError> {
        self.repo.get_all().await
    }

    /// Look up an activity by exact name, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::NotFound`] when no activity is named `name`,
    /// or a storage error from the repository.
    pub async fn get_activity(&self, name: &str) -> Result<Activity, MergingtonError> {
        self.repo.get_by_name(name).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Activity",
                key: name.to_string(),
            }
            .into()
        })
    }

    /// Sign `email` up for the activity called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::NotFound`] for an unknown activity,
    /// [`MergingtonError::Conflict`] when `email` is already a participant,
    /// or a storage error from the repository.
    pub async fn enroll(&self, name: &str, email: Email) -> Result<Enrollment, MergingtonError> {
        let _guard = self.write_lock.lock().await;
        let mut activity = self.get_activity(name).await?;
        let enrollment = activity.enroll(email).inspect_err(|err| {
            tracing::debug!(activity = name, error = %err, "enroll rejected");
        })?;
        self.repo.update(activity).await?;
        tracing::info!(
            activity = %enrollment.activity,
            email = %enrollment.email,
            "participant enrolled"
        );
        Ok(enrollment)
    }

    /// Remove `email` from the activity called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::NotFound`] for an unknown activity,
    /// [`MergingtonError::Conflict`] when `email` is not a participant,
    /// or a storage error from the repository.
    pub async fn unenroll(&self, name: &str, email: Email) -> Result<Enrollment, MergingtonError> {
        let _guard = self.write_lock.lock().await;
        let mut activity = self.get_activity(name).await?;
        let enrollment = activity.unenroll(email).inspect_err(|err| {
            tracing::debug!(activity = name, error = %err, "unenroll rejected");
        })?;
        self.repo.update(activity).await?;
        tracing::info!(
            activity = %enrollment.activity,
            email = %enrollment.email,
            "participant unenrolled"
        );
        Ok(enrollment)
    }
}
