//! Per-caller ordering of in-flight submissions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::caller::Caller;

/// Handle returned by [`SubmissionSequencer::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    user_id: Option<String>,
    sequence: u64,
}

impl SubmissionTicket {
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    newest: u64,
    in_flight: usize,
}

/// Hands out monotonically increasing sequence numbers and remembers the
/// newest one per identified caller while that caller has work in flight.
#[derive(Debug, Default)]
pub struct SubmissionSequencer {
    next: AtomicU64,
    slots: Mutex<HashMap<String, Slot>>,
}

impl SubmissionSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn begin(&self, caller: &Caller) -> SubmissionTicket {
        let sequence = self.next.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        let user_id = caller.user_id().map(str::to_owned);
        if let Some(user) = &user_id {
            let mut slots = self.slots.lock().await;
            let slot = slots.entry(user.clone()).or_insert(Slot { newest: sequence, in_flight: 0 });
            slot.newest = sequence;
            slot.in_flight = slot.in_flight.saturating_add(1);
        }
        SubmissionTicket { user_id, sequence }
    }

    /// Retire `ticket`. Returns false when the same caller started a newer
    /// submission in the meantime.
    ///
    /// Anonymous tickets are always latest; there is no identity to group them by.
    /// A caller's slot is dropped once none of its submissions are in flight.
    pub async fn finish(&self, ticket: &SubmissionTicket) -> bool {
        let Some(user) = &ticket.user_id else {
            return true;
        };
        let mut slots = self.slots.lock().await;
        let Some(slot) = slots.get_mut(user) else {
            return true;
        };
        let latest = slot.newest == ticket.sequence;
        slot.in_flight = slot.in_flight.saturating_sub(1);
        if slot.in_flight == 0 {
            slots.remove(user);
        }
        latest
    }

    #[cfg(test)]
    pub(crate) async fn tracked_callers(&self) -> usize {
        self.slots.lock().await.len()
    }
}
