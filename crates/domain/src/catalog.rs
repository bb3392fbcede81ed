//! Seed catalog — the activities offered when the directory starts.

use crate::activity::Activity;
use crate::error::MergingtonError;

struct Seed {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    Seed {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    Seed {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    Seed {
        name: "Basketball",
        description: "Practice drills and play in the inter-school league",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu"],
    },
    Seed {
        name: "Soccer Team",
        description: "Train with the school team and play weekend matches",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["lucas@mergington.edu", "mia@mergington.edu"],
    },
    Seed {
        name: "Art Club",
        description: "Explore painting, drawing and sculpture",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu"],
    },
    Seed {
        name: "Drama Club",
        description: "Act, direct and stage the school plays",
        schedule: "Thursdays, 3:30 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "noah@mergington.edu"],
    },
    Seed {
        name: "Math Club",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["liam@mergington.edu"],
    },
    Seed {
        name: "Debate Team",
        description: "Build public speaking skills and compete in debate tournaments",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

/// Build the Mergington High School activity set, in display order.
///
/// # Errors
///
/// Returns [`MergingtonError::Validation`] if a seed entry breaks an
/// [`Activity`] invariant.
pub fn mergington_activities() -> Result<Vec<Activity>, MergingtonError> {
    SEEDS
        .iter()
        .map(|seed| {
            seed.participants
                .iter()
                .fold(
                    Activity::builder()
                        .name(seed.name)
                        .description(seed.description)
                        .schedule(seed.schedule)
                        .max_participants(seed.max_participants),
                    |builder, email| builder.participant(*email),
                )
                .build()
        })
        .collect()
}
