use petpals_domain::{Event, EventType, EventWithOwner, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub pet_id: ID,
    pub user_id: ID,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub description: String,
    pub event_type: EventType,
    pub detail: Option<String>,
    pub frequency: Option<i64>,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            id: event.id,
            pet_id: event.pet_id,
            user_id: event.user_id,
            start_time: event.start_time,
            end_time: event.end_time,
            description: event.description,
            event_type: event.event_type,
            detail: event.detail,
            frequency: event.frequency,
        }
    }
}

/// An event listed together with the pet it reminds about
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventWithPetDTO {
    pub event: EventDTO,
    pub pet_name: String,
}

impl EventWithPetDTO {
    pub fn new(event: EventWithOwner) -> Self {
        Self {
            event: EventDTO::new(event.event),
            pet_name: event.pet_name,
        }
    }
}
