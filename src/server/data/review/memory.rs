//! In-memory [`ReviewStore`] for exercising the workflow without a database.
//!
//! Each instance sits behind its own mutex, so a compare-and-set holds exactly one lock
//! while it checks and writes. Inserts hold the map lock across the open-instance check.
//! A punishment release can be made to fail to exercise the all-or-nothing decision path.

use async_trait::async_trait;
use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicBool, AtomicI32, Ordering},
        Arc, Mutex,
    },
};

use crate::{
    model::review::ReviewCategory,
    server::{
        data::review::ReviewStore,
        error::review::ReviewError,
        model::{
            punishment::Punishment,
            review::{NewReviewInstance, ReviewInstance, ReviewStatus, Transition},
        },
    },
};

#[derive(Default)]
pub struct InMemoryReviewStore {
    instances: Mutex<BTreeMap<i32, Arc<Mutex<ReviewInstance>>>>,
    /// Punishment id to `expires_at`.
    punishments: Mutex<HashMap<i32, i64>>,
    next_id: AtomicI32,
    fail_punishment_release: AtomicBool,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a punishment that an accepted appeal can release.
    pub fn add_punishment(&self, id: i32, expires_at: i64) {
        self.punishments.lock().unwrap().insert(id, expires_at);
    }

    pub fn punishment_expiry(&self, id: i32) -> Option<i64> {
        self.punishments.lock().unwrap().get(&id).copied()
    }

    /// Makes every following punishment release fail.
    pub fn fail_punishment_release(&self, fail: bool) {
        self.fail_punishment_release.store(fail, Ordering::SeqCst);
    }

    fn slot(&self, id: i32) -> Option<Arc<Mutex<ReviewInstance>>> {
        self.instances.lock().unwrap().get(&id).cloned()
    }

    fn snapshot(&self) -> Vec<ReviewInstance> {
        let slots: Vec<_> = self.instances.lock().unwrap().values().cloned().collect();
        slots
            .iter()
            .map(|slot| slot.lock().unwrap().clone())
            .collect()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn get_instance(
        &self,
        category: ReviewCategory,
        id: i32,
    ) -> Result<Option<ReviewInstance>, ReviewError> {
        Ok(self
            .slot(id)
            .map(|slot| slot.lock().unwrap().clone())
            .filter(|instance| instance.category == category))
    }

    async fn insert(&self, instance: NewReviewInstance) -> Result<ReviewInstance, ReviewError> {
        let category = instance.payload.category();
        let mut instances = self.instances.lock().unwrap();

        let has_open = instances.values().any(|slot| {
            let existing = slot.lock().unwrap();
            existing.category == category
                && existing.subject == instance.subject
                && ReviewStatus::OPEN.contains(&existing.status)
        });
        if has_open {
            return Err(ReviewError::DuplicatePending {
                category,
                subject: instance.subject,
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = ReviewInstance {
            id,
            category,
            subject: instance.subject,
            status: ReviewStatus::Pending,
            claimed_by: None,
            handled_by: None,
            response: None,
            payload: instance.payload,
            created_at: instance.created_at,
            handled_at: None,
        };

        instances.insert(id, Arc::new(Mutex::new(stored.clone())));

        Ok(stored)
    }

    async fn compare_and_set_status(
        &self,
        category: ReviewCategory,
        id: i32,
        expected: &[ReviewStatus],
        transition: &Transition,
    ) -> Result<bool, ReviewError> {
        let Some(slot) = self.slot(id) else {
            return Ok(false);
        };
        let mut instance = slot.lock().unwrap();

        if instance.category != category || !expected.contains(&instance.status) {
            return Ok(false);
        }

        if let Transition::Decide {
            release_punishment: Some(punishment_id),
            ..
        } = transition
        {
            let mut punishments = self.punishments.lock().unwrap();
            if self.fail_punishment_release.load(Ordering::SeqCst)
                || !punishments.contains_key(punishment_id)
            {
                return Err(sea_orm::DbErr::RecordNotUpdated.into());
            }
            punishments.insert(*punishment_id, Punishment::RELEASED_AT);
        }

        transition.apply(&mut instance);

        Ok(true)
    }

    async fn get_last_decided(
        &self,
        category: ReviewCategory,
        subject: &str,
    ) -> Result<Option<ReviewInstance>, ReviewError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|i| i.category == category && i.subject == subject && i.status.is_terminal())
            .max_by_key(|i| (i.handled_at, i.id)))
    }

    async fn list_by_status(
        &self,
        category: ReviewCategory,
        statuses: &[ReviewStatus],
    ) -> Result<Vec<ReviewInstance>, ReviewError> {
        let mut instances: Vec<_> = self
            .snapshot()
            .into_iter()
            .filter(|i| i.category == category && statuses.contains(&i.status))
            .collect();
        instances.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(instances)
    }

    async fn list_for_subject(
        &self,
        category: ReviewCategory,
        subject: &str,
    ) -> Result<Vec<ReviewInstance>, ReviewError> {
        let mut instances: Vec<_> = self
            .snapshot()
            .into_iter()
            .filter(|i| i.category == category && i.subject == subject)
            .collect();
        instances.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(instances)
    }
}
