use super::{IActivityRepo, TimeRange};
use crate::repos::shared::inmemory_repo::*;
use petpals_domain::{Activity, ID};

pub struct InMemoryActivityRepo {
    activities: std::sync::Mutex<Vec<Activity>>,
}

impl InMemoryActivityRepo {
    pub fn new() -> Self {
        Self {
            activities: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IActivityRepo for InMemoryActivityRepo {
    async fn insert(&self, activity: &Activity) -> anyhow::Result<()> {
        insert(activity, &self.activities);
        Ok(())
    }

    async fn save(&self, activity: &Activity) -> anyhow::Result<()> {
        save(activity, &self.activities);
        Ok(())
    }

    async fn find(&self, activity_id: &ID) -> Option<Activity> {
        find(activity_id, &self.activities)
    }

    async fn find_by_pet(&self, pet_id: &ID) -> Vec<Activity> {
        find_by(&self.activities, |activity| activity.pet_id == *pet_id)
    }

    async fn delete(&self, activity_id: &ID) -> Option<Activity> {
        delete(activity_id, &self.activities)
    }

    async fn delete_by_pet(&self, pet_id: &ID) -> anyhow::Result<()> {
        delete_by(&self.activities, |activity| activity.pet_id == *pet_id);
        Ok(())
    }

    async fn sum_frequency(&self, pet_id: &ID, activity: &str, range: Option<TimeRange>) -> i64 {
        find_by(&self.activities, |a| {
            a.pet_id == *pet_id
                && a.activity == activity
                && match range {
                    Some(range) => range.start <= a.date && a.date <= range.end,
                    None => true,
                }
        })
        .iter()
        .map(|a| a.frequency)
        .sum()
    }
}
