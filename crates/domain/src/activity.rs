//! Activity — a named extracurricular offering and its participant list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::email::Email;
use crate::error::{ConflictError, MergingtonError, ValidationError};

/// An extracurricular activity students can sign up for.
///
/// `participants` keeps signup order and never holds the same email twice.
/// `max_participants` is informational: enrollment does not check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<Email>,
}

/// Confirmation of a successful enroll or unenroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub activity: String,
    pub email: Email,
}

impl Activity {
    /// Create a builder for constructing an [`Activity`].
    #[must_use]
    pub fn builder() -> ActivityBuilder {
        ActivityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::Validation`] when a text field is empty,
    /// the capacity is zero, or a participant appears twice.
    pub fn validate(&self) -> Result<(), MergingtonError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.description.is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        if self.schedule.is_empty() {
            return Err(ValidationError::EmptySchedule.into());
        }
        if self.max_participants == 0 {
            return Err(ValidationError::ZeroCapacity.into());
        }
        let mut seen = HashSet::with_capacity(self.participants.len());
        for email in &self.participants {
            if !seen.insert(email) {
                return Err(ValidationError::DuplicateParticipant(email.clone()).into());
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_enrolled(&self, email: &Email) -> bool {
        self.participants.contains(email)
    }

    /// Remaining seats, saturating at zero when over-subscribed.
    #[must_use]
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    /// Append `email` to the participant list.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::AlreadySignedUp`] when `email` is already a
    /// participant. The list is left untouched in that case.
    pub fn enroll(&mut self, email: Email) -> Result<Enrollment, MergingtonError> {
        if self.is_enrolled(&email) {
            return Err(ConflictError::AlreadySignedUp {
                activity: self.name.clone(),
                email,
            }
            .into());
        }
        self.participants.push(email.clone());
        Ok(Enrollment {
            activity: self.name.clone(),
            email,
        })
    }

    /// Remove one occurrence of `email` from the participant list.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::NotSignedUp`] when `email` is not a participant.
    pub fn unenroll(&mut self, email: Email) -> Result<Enrollment, MergingtonError> {
        let Some(index) = self.participants.iter().position(|p| *p == email) else {
            return Err(ConflictError::NotSignedUp {
                activity: self.name.clone(),
                email,
            }
            .into());
        };
        self.participants.remove(index);
        Ok(Enrollment {
            activity: self.name.clone(),
            email,
        })
    }
}

/// Step-by-step builder for [`Activity`].
#[derive(Debug, Default)]
pub struct ActivityBuilder {
    name: Option<String>,
    description: Option<String>,
    schedule: Option<String>,
    max_participants: Option<u32>,
    participants: Vec<Email>,
}

impl ActivityBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    #[must_use]
    pub fn max_participants(mut self, max_participants: u32) -> Self {
        self.max_participants = Some(max_participants);
        self
    }

    /// Add a pre-enrolled participant. Order of calls is signup order.
    #[must_use]
    pub fn participant(mut self, email: impl Into<Email>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Consume the builder, validate, and return an [`Activity`].
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::Validation`] if a required field is missing
    /// or empty, or if a participant was added twice.
    pub fn build(self) -> Result<Activity, MergingtonError> {
        let activity = Activity {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            schedule: self.schedule.unwrap_or_default(),
            max_participants: self.max_participants.unwrap_or_default(),
            participants: self.participants,
        };
        activity.validate()?;
        Ok(activity)
    }
}
