use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    HealthCare,
    Walk,
}

/// A scheduled reminder for a `Pet`. The notifier only cares about
/// `start_time`; the remaining fields are displayed to the owner.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: ID,
    pub pet_id: ID,
    /// The owning `User`, denormalized from the pet for cheap
    /// per-user listing
    pub user_id: ID,
    /// UTC timestamp in millis at which the event becomes due
    pub start_time: i64,
    /// UTC timestamp in millis
    pub end_time: Option<i64>,
    pub description: String,
    pub event_type: EventType,
    pub detail: Option<String>,
    /// How often the reminder repeats, display-only
    pub frequency: Option<i64>,
}

impl Entity<ID> for Event {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// An `Event` joined with the pet it belongs to and the owner's
/// contact address, which is everything the notifier needs to
/// dispatch an email.
#[derive(Debug, Clone)]
pub struct EventWithOwner {
    pub event: Event,
    pub pet_name: String,
    pub owner_email: String,
}
