use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use petpals_domain::{Event, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, event: &Event) -> anyhow::Result<()> {
        insert(event, &self.events);
        Ok(())
    }

    async fn save(&self, event: &Event) -> anyhow::Result<()> {
        save(event, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        find(event_id, &self.events)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Event> {
        find_by(&self.events, |event| event.user_id == *user_id)
    }

    async fn find_by_pet(&self, pet_id: &ID) -> Vec<Event> {
        find_by(&self.events, |event| event.pet_id == *pet_id)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        Ok(find_by(&self.events, |_| true))
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        delete(event_id, &self.events)
    }

    async fn delete_by_pet(&self, pet_id: &ID) -> anyhow::Result<()> {
        delete_by(&self.events, |event| event.pet_id == *pet_id);
        Ok(())
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        delete_by(&self.events, |event| event.user_id == *user_id);
        Ok(())
    }
}
