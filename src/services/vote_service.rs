use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{VoteDirection, VoteResponse};
use crate::store::IdeaStore;

/// Applies vote transitions to the store with optimistic-update semantics.
///
/// The predicted tally is written before the (simulated) backend round
/// trip completes; a failed confirmation writes the pre-request tally
/// back. While a request is in flight for an idea, further votes for that
/// idea are rejected, so transitions per idea are strictly serialized.
/// Votes for different ideas are independent.
pub struct VoteService {
    store: Arc<IdeaStore>,
    in_flight: Mutex<HashSet<Uuid>>,
    confirm_delay: Duration,
    offline: AtomicBool,
}

impl VoteService {
    pub fn new(store: Arc<IdeaStore>, confirm_delay: Duration) -> Self {
        Self {
            store,
            in_flight: Mutex::new(HashSet::new()),
            confirm_delay,
            offline: AtomicBool::new(false),
        }
    }

    /// Simulates a backend outage: while offline, confirmations fail and
    /// every optimistic update is rolled back.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    pub async fn vote(&self, idea_id: Uuid, direction: VoteDirection) -> Result<VoteResponse> {
        let _pending = self.acquire(idea_id)?;

        let current = self
            .store
            .tally(idea_id)
            .await
            .ok_or_else(|| AppError::NotFound("Idea not found".to_string()))?;
        let next = current.apply(direction);

        // Optimistic: show the predicted tally before the backend answers
        self.store.set_tally(idea_id, next).await;

        if let Err(err) = self.confirm(idea_id).await {
            // Restore the pre-request tally
            self.store.set_tally(idea_id, current).await;
            tracing::warn!("Vote for idea {} failed, rolled back: {}", idea_id, err);
            return Err(err);
        }

        tracing::debug!(
            "Vote for idea {} confirmed: {:?} -> {:?}",
            idea_id,
            current.user_vote,
            next.user_vote
        );
        Ok(next.into())
    }

    fn acquire(&self, idea_id: Uuid) -> Result<PendingVote<'_>> {
        let mut in_flight = lock_in_flight(&self.in_flight);
        if !in_flight.insert(idea_id) {
            return Err(AppError::Conflict(
                "A vote for this idea is already in flight".to_string(),
            ));
        }
        Ok(PendingVote {
            service: self,
            idea_id,
        })
    }

    // Stand-in for the confirmation round trip against a real backend
    async fn confirm(&self, _idea_id: Uuid) -> Result<()> {
        tokio::time::sleep(self.confirm_delay).await;
        if self.offline.load(Ordering::Relaxed) {
            return Err(AppError::VoteBackend(
                "Vote could not be confirmed, please try again".to_string(),
            ));
        }
        Ok(())
    }
}

fn lock_in_flight(in_flight: &Mutex<HashSet<Uuid>>) -> std::sync::MutexGuard<'_, HashSet<Uuid>> {
    in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Lock token for one idea's vote control. Dropping it releases the idea
/// on every exit path, so a failed request never leaves the control stuck.
struct PendingVote<'a> {
    service: &'a VoteService,
    idea_id: Uuid,
}

impl Drop for PendingVote<'_> {
    fn drop(&mut self) {
        lock_in_flight(&self.service.in_flight).remove(&self.idea_id);
    }
}
