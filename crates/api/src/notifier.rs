use actix_web::rt::time::{interval, timeout};
use chrono::{TimeZone, Utc};
use petpals_domain::EventWithOwner;
use petpals_infra::{create_email_service, IEmailService, PetpalsContext};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Queue entry ordered so that the `BinaryHeap` pops the event with
/// the smallest `start_time` first. Ties are broken by event id so
/// that dispatch order is deterministic.
struct PendingNotification(EventWithOwner);

impl PartialEq for PendingNotification {
    fn eq(&self, other: &Self) -> bool {
        self.0.event.id == other.0.event.id
    }
}

impl Eq for PendingNotification {}

impl PartialOrd for PendingNotification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingNotification {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .event
            .start_time
            .cmp(&self.0.event.start_time)
            .then_with(|| other.0.event.id.cmp(&self.0.event.id))
    }
}

/// In-memory notification queue. Holds every upcoming event sorted by
/// `start_time` and emails the owner once an event becomes due. Entries
/// are popped before dispatch, so each event is notified at most once;
/// a failed send is logged and dropped, never retried.
pub struct Notifier {
    queue: BinaryHeap<PendingNotification>,
    email_service: Arc<dyn IEmailService>,
}

impl Notifier {
    pub fn new(email_service: Arc<dyn IEmailService>) -> Self {
        Self {
            queue: BinaryHeap::new(),
            email_service,
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Fills the queue with every stored event that is still in the
    /// future. Events whose pet or owner no longer exists are skipped.
    pub async fn load(&mut self, ctx: &PetpalsContext) -> anyhow::Result<()> {
        let now = ctx.sys.get_timestamp_millis();
        let events = ctx.repos.events.find_all().await?;

        for event in events {
            if event.start_time <= now {
                continue;
            }
            let pet = match ctx.repos.pets.find(&event.pet_id).await {
                Some(pet) => pet,
                None => continue,
            };
            let owner = match ctx.repos.users.find(&event.user_id).await {
                Some(owner) => owner,
                None => continue,
            };
            self.queue.push(PendingNotification(EventWithOwner {
                event,
                pet_name: pet.name,
                owner_email: owner.email,
            }));
        }

        info!("Notifier loaded {} upcoming event(s)", self.queue.len());
        Ok(())
    }

    /// Pops and dispatches every event that has become due. A dispatch
    /// failure only affects that event, the rest of the queue is still
    /// processed.
    pub async fn tick(&mut self, ctx: &PetpalsContext) {
        let now = ctx.sys.get_timestamp_millis();

        while self
            .queue
            .peek()
            .map_or(false, |pending| pending.0.event.start_time <= now)
        {
            if let Some(pending) = self.queue.pop() {
                if let Err(e) = self.dispatch(&pending.0, ctx).await {
                    error!(
                        "Failed to dispatch notification for event with id: {}. Error: {:?}",
                        pending.0.event.id, e
                    );
                }
            }
        }
    }

    async fn dispatch(&self, event: &EventWithOwner, ctx: &PetpalsContext) -> anyhow::Result<()> {
        let starts_at = Utc.timestamp_millis(event.event.start_time).to_rfc3339();
        let body = format!(
            "You have an event {} for {} at {}",
            event.event.description, event.pet_name, starts_at
        );

        timeout(
            Duration::from_millis(ctx.config.dispatch_timeout_millis),
            self.email_service
                .send(&event.owner_email, "Event Notification", &body),
        )
        .await?
    }
}

/// Spawns the background notification job. The queue is a one-time
/// snapshot of the stored events, updated events are picked up on the
/// next restart.
pub fn start_notifier_job(ctx: PetpalsContext) {
    let email_service = create_email_service(&ctx.config);

    actix_web::rt::spawn(async move {
        let mut notifier = Notifier::new(email_service);
        if let Err(e) = notifier.load(&ctx).await {
            error!("Unable to load events into the notifier: {:?}", e);
            return;
        }

        let mut check_interval = interval(Duration::from_secs(ctx.config.notifier_interval_secs));
        loop {
            check_interval.tick().await;
            notifier.tick(&ctx).await;
        }
    });
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_domain::{Event, EventType, Pet, PetSpecies, Sex, User};
    use petpals_infra::{setup_context, ISys};
    use std::sync::Mutex;

    struct StaticTimeSys(i64);
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    struct RecordingEmailService {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl RecordingEmailService {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
            })
        }

        fn sent(&self) -> Vec<(String, String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl IEmailService for RecordingEmailService {
        async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string(), body.to_string()));
            Ok(())
        }
    }

    /// Fails every send to the given address, succeeds otherwise.
    struct FailingEmailService {
        failing_address: String,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl IEmailService for FailingEmailService {
        async fn send(&self, to: &str, _subject: &str, _body: &str) -> anyhow::Result<()> {
            if to == self.failing_address {
                anyhow::bail!("Relay rejected the message");
            }
            self.sent.lock().unwrap().push(to.to_string());
            Ok(())
        }
    }

    /// Never resolves for the given address, succeeds otherwise.
    struct StalledEmailService {
        stalled_address: String,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl IEmailService for StalledEmailService {
        async fn send(&self, to: &str, _subject: &str, _body: &str) -> anyhow::Result<()> {
            if to == self.stalled_address {
                std::future::pending::<()>().await;
            }
            self.sent.lock().unwrap().push(to.to_string());
            Ok(())
        }
    }

    async fn ctx_at(now: i64) -> PetpalsContext {
        let mut ctx = setup_context().await;
        ctx.sys = Arc::new(StaticTimeSys(now));
        ctx
    }

    async fn insert_owner_and_pet(ctx: &PetpalsContext, email: &str) -> Pet {
        let user = User::new(email, "Owner");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(user.id.clone(), "Fido", Sex::Male, PetSpecies::Dog, 0);
        ctx.repos.pets.insert(&pet).await.unwrap();
        pet
    }

    async fn insert_event(ctx: &PetpalsContext, pet: &Pet, start_time: i64) -> Event {
        let event = Event {
            id: Default::default(),
            pet_id: pet.id.clone(),
            user_id: pet.user_id.clone(),
            start_time,
            end_time: None,
            description: "Morning walk".into(),
            event_type: EventType::Walk,
            detail: None,
            frequency: None,
        };
        ctx.repos.events.insert(&event).await.unwrap();
        event
    }

    #[actix_web::main]
    #[test]
    async fn load_skips_past_events() {
        let now = 1_000_000;
        let ctx = ctx_at(now).await;
        let pet = insert_owner_and_pet(&ctx, "past@petpals.test").await;
        insert_event(&ctx, &pet, now - 500).await;
        insert_event(&ctx, &pet, now + 300).await;
        insert_event(&ctx, &pet, now + 900).await;

        let mut notifier = Notifier::new(RecordingEmailService::new());
        notifier.load(&ctx).await.unwrap();

        assert_eq!(notifier.len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn load_skips_events_without_pet_or_owner() {
        let now = 1_000_000;
        let ctx = ctx_at(now).await;
        let pet = insert_owner_and_pet(&ctx, "orphan@petpals.test").await;
        insert_event(&ctx, &pet, now + 100).await;

        let orphan = Event {
            id: Default::default(),
            pet_id: Default::default(),
            user_id: pet.user_id.clone(),
            start_time: now + 100,
            end_time: None,
            description: "Dangling".into(),
            event_type: EventType::Walk,
            detail: None,
            frequency: None,
        };
        ctx.repos.events.insert(&orphan).await.unwrap();

        let mut notifier = Notifier::new(RecordingEmailService::new());
        notifier.load(&ctx).await.unwrap();

        assert_eq!(notifier.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn dispatches_due_events_in_start_time_order() {
        let now = 1_000_000;
        let mut ctx = ctx_at(now).await;
        let pet = insert_owner_and_pet(&ctx, "order@petpals.test").await;
        insert_event(&ctx, &pet, now + 300).await;
        insert_event(&ctx, &pet, now + 100).await;
        insert_event(&ctx, &pet, now + 200).await;

        let mailer = RecordingEmailService::new();
        let mut notifier = Notifier::new(mailer.clone());
        notifier.load(&ctx).await.unwrap();

        ctx.sys = Arc::new(StaticTimeSys(now + 400));
        notifier.tick(&ctx).await;

        let sent = mailer.sent();
        assert_eq!(sent.len(), 3);
        assert!(notifier.is_empty());

        let times: Vec<String> = [now + 100, now + 200, now + 300]
            .iter()
            .map(|t| Utc.timestamp_millis(*t).to_rfc3339())
            .collect();
        for (i, (to, subject, body)) in sent.iter().enumerate() {
            assert_eq!(to, "order@petpals.test");
            assert_eq!(subject, "Event Notification");
            assert!(body.contains(&times[i]));
        }
    }

    #[actix_web::main]
    #[test]
    async fn tick_leaves_future_events_queued() {
        let now = 1_000_000;
        let mut ctx = ctx_at(now).await;
        let pet = insert_owner_and_pet(&ctx, "partial@petpals.test").await;
        insert_event(&ctx, &pet, now + 100).await;
        insert_event(&ctx, &pet, now + 900).await;

        let mailer = RecordingEmailService::new();
        let mut notifier = Notifier::new(mailer.clone());
        notifier.load(&ctx).await.unwrap();

        ctx.sys = Arc::new(StaticTimeSys(now + 200));
        notifier.tick(&ctx).await;

        assert_eq!(mailer.sent().len(), 1);
        assert_eq!(notifier.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn events_are_notified_at_most_once() {
        let now = 1_000_000;
        let mut ctx = ctx_at(now).await;
        let pet = insert_owner_and_pet(&ctx, "once@petpals.test").await;
        insert_event(&ctx, &pet, now + 100).await;

        let mailer = RecordingEmailService::new();
        let mut notifier = Notifier::new(mailer.clone());
        notifier.load(&ctx).await.unwrap();

        ctx.sys = Arc::new(StaticTimeSys(now + 200));
        notifier.tick(&ctx).await;
        notifier.tick(&ctx).await;
        notifier.tick(&ctx).await;

        assert_eq!(mailer.sent().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn failed_dispatch_does_not_block_the_queue() {
        let now = 1_000_000;
        let mut ctx = ctx_at(now).await;
        let failing_pet = insert_owner_and_pet(&ctx, "broken@petpals.test").await;
        insert_event(&ctx, &failing_pet, now + 100).await;
        let healthy_pet = insert_owner_and_pet(&ctx, "healthy@petpals.test").await;
        insert_event(&ctx, &healthy_pet, now + 200).await;

        let mailer = Arc::new(FailingEmailService {
            failing_address: "broken@petpals.test".into(),
            sent: Mutex::new(Vec::new()),
        });
        let mut notifier = Notifier::new(mailer.clone());
        notifier.load(&ctx).await.unwrap();

        ctx.sys = Arc::new(StaticTimeSys(now + 300));
        notifier.tick(&ctx).await;

        // The failed event is dropped and the later one still goes out
        assert!(notifier.is_empty());
        let sent = mailer.sent.lock().unwrap().clone();
        assert_eq!(sent, vec!["healthy@petpals.test".to_string()]);
    }

    #[actix_web::main]
    #[test]
    async fn timed_out_dispatch_counts_as_failure() {
        let now = 1_000_000;
        let mut ctx = ctx_at(now).await;
        ctx.config.dispatch_timeout_millis = 20;
        let stalled_pet = insert_owner_and_pet(&ctx, "stalled@petpals.test").await;
        insert_event(&ctx, &stalled_pet, now + 100).await;
        let healthy_pet = insert_owner_and_pet(&ctx, "responsive@petpals.test").await;
        insert_event(&ctx, &healthy_pet, now + 200).await;

        let mailer = Arc::new(StalledEmailService {
            stalled_address: "stalled@petpals.test".into(),
            sent: Mutex::new(Vec::new()),
        });
        let mut notifier = Notifier::new(mailer.clone());
        notifier.load(&ctx).await.unwrap();

        ctx.sys = Arc::new(StaticTimeSys(now + 300));
        notifier.tick(&ctx).await;

        // The hanging send times out, is dropped, and the later
        // event still goes out
        assert!(notifier.is_empty());
        let sent = mailer.sent.lock().unwrap().clone();
        assert_eq!(sent, vec!["responsive@petpals.test".to_string()]);
    }

    #[actix_web::main]
    #[test]
    async fn tick_on_empty_queue_is_a_noop() {
        let ctx = ctx_at(1_000_000).await;
        let mailer = RecordingEmailService::new();
        let mut notifier = Notifier::new(mailer.clone());

        notifier.tick(&ctx).await;

        assert!(mailer.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn equal_start_times_pop_in_id_order() {
        let now = 1_000_000;
        let mut ctx = ctx_at(now).await;
        let pet = insert_owner_and_pet(&ctx, "ties@petpals.test").await;
        let mut events = Vec::new();
        for description in ["First walk", "Second walk"] {
            let event = Event {
                id: Default::default(),
                pet_id: pet.id.clone(),
                user_id: pet.user_id.clone(),
                start_time: now + 100,
                end_time: None,
                description: description.into(),
                event_type: EventType::Walk,
                detail: None,
                frequency: None,
            };
            ctx.repos.events.insert(&event).await.unwrap();
            events.push(event);
        }
        events.sort_by(|a, b| a.id.cmp(&b.id));

        let mailer = RecordingEmailService::new();
        let mut notifier = Notifier::new(mailer.clone());
        notifier.load(&ctx).await.unwrap();

        ctx.sys = Arc::new(StaticTimeSys(now + 200));
        notifier.tick(&ctx).await;

        // Ties dispatch in ascending id order
        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);
        for (dispatched, event) in sent.iter().zip(&events) {
            assert!(dispatched.2.contains(&event.description));
        }
        assert!(notifier.is_empty());
    }
}
