use super::IHealthRecordRepo;
use crate::repos::shared::inmemory_repo::*;
use petpals_domain::{HealthRecord, ID};

pub struct InMemoryHealthRecordRepo {
    records: std::sync::Mutex<Vec<HealthRecord>>,
}

impl InMemoryHealthRecordRepo {
    pub fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IHealthRecordRepo for InMemoryHealthRecordRepo {
    async fn insert(&self, record: &HealthRecord) -> anyhow::Result<()> {
        insert(record, &self.records);
        Ok(())
    }

    async fn save(&self, record: &HealthRecord) -> anyhow::Result<()> {
        save(record, &self.records);
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> Option<HealthRecord> {
        find(record_id, &self.records)
    }

    async fn find_by_pet(&self, pet_id: &ID) -> Vec<HealthRecord> {
        find_by(&self.records, |record| record.pet_id == *pet_id)
    }

    async fn delete(&self, record_id: &ID) -> Option<HealthRecord> {
        delete(record_id, &self.records)
    }

    async fn delete_by_pet(&self, pet_id: &ID) -> anyhow::Result<()> {
        delete_by(&self.records, |record| record.pet_id == *pet_id);
        Ok(())
    }
}
