use crate::dtos::{EventDTO, EventWithPetDTO};
use petpals_domain::{Event, EventType, EventWithOwner, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event: EventDTO,
}

impl EventResponse {
    pub fn new(event: Event) -> Self {
        Self {
            event: EventDTO::new(event),
        }
    }
}

pub mod create_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub start_time: i64,
        pub end_time: Option<i64>,
        pub description: String,
        pub event_type: EventType,
        pub detail: Option<String>,
        pub frequency: Option<i64>,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_user_events {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<EventWithPetDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<EventWithOwner>) -> Self {
            Self {
                events: events.into_iter().map(EventWithPetDTO::new).collect(),
            }
        }
    }
}

pub mod get_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_pet_events {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<EventDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<Event>) -> Self {
            Self {
                events: events.into_iter().map(EventDTO::new).collect(),
            }
        }
    }
}

pub mod update_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub start_time: Option<i64>,
        pub end_time: Option<i64>,
        pub description: Option<String>,
        pub event_type: Option<EventType>,
        pub detail: Option<String>,
        pub frequency: Option<i64>,
    }

    pub type APIResponse = EventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}
