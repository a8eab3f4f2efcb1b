//! Delayed delivery of simulated replies.
//!
//! Conversations never sleep themselves: they hand a callback to a
//! [`ReplyScheduler`] and keep the returned handle so the callback can be
//! cancelled when the page unmounts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Callback fired once the reply delay elapses.
pub type ScheduledReply = Box<dyn FnOnce() + Send + 'static>;

/// Clock plus one-shot timer used by conversations.
pub trait ReplyScheduler: Send + Sync {
    /// Current time in Unix milliseconds, used to stamp messages.
    fn now_unix_ms(&self) -> u64;

    /// Runs `task` once after `delay` unless the returned handle is cancelled first.
    fn schedule(&self, delay: Duration, task: ScheduledReply) -> ScheduledReplyHandle;
}

/// Cancellation handle for one scheduled reply.
#[derive(Debug, Clone)]
pub struct ScheduledReplyHandle {
    cancelled: Arc<AtomicBool>,
    abort: Option<AbortHandle>,
}

impl ScheduledReplyHandle {
    fn new(cancelled: Arc<AtomicBool>, abort: Option<AbortHandle>) -> Self {
        Self { cancelled, abort }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Wall-clock scheduler backed by tokio timers.
#[derive(Debug, Clone)]
pub struct TokioReplyScheduler {
    runtime: Handle,
}

impl TokioReplyScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Binds to the runtime of the calling context, if any.
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl ReplyScheduler for TokioReplyScheduler {
    fn now_unix_ms(&self) -> u64 {
        rail_core::current_unix_timestamp_ms()
    }

    fn schedule(&self, delay: Duration, task: ScheduledReply) -> ScheduledReplyHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let task_cancelled = Arc::clone(&cancelled);
        let join = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if !task_cancelled.load(Ordering::SeqCst) {
                task();
            }
        });
        ScheduledReplyHandle::new(cancelled, Some(join.abort_handle()))
    }
}

struct ManualQueueEntry {
    due_unix_ms: u64,
    sequence: u64,
    cancelled: Arc<AtomicBool>,
    task: ScheduledReply,
}

struct ManualSchedulerState {
    now_unix_ms: u64,
    next_sequence: u64,
    queue: Vec<ManualQueueEntry>,
}

/// Virtual-time scheduler: nothing fires until [`ManualReplyScheduler::advance`] is called.
pub struct ManualReplyScheduler {
    state: Mutex<ManualSchedulerState>,
}

impl ManualReplyScheduler {
    pub fn new(start_unix_ms: u64) -> Self {
        Self {
            state: Mutex::new(ManualSchedulerState {
                now_unix_ms: start_unix_ms,
                next_sequence: 0,
                queue: Vec::new(),
            }),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ManualSchedulerState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Moves virtual time forward, firing due callbacks in (due time, schedule order).
    ///
    /// Returns how many callbacks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let by_ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        let target = self.lock_state().now_unix_ms.saturating_add(by_ms);
        let mut fired = 0;
        loop {
            let next = {
                let mut state = self.lock_state();
                let position = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due_unix_ms <= target)
                    .min_by_key(|(_, entry)| (entry.due_unix_ms, entry.sequence))
                    .map(|(position, _)| position);
                match position {
                    Some(position) => {
                        let entry = state.queue.remove(position);
                        state.now_unix_ms = state.now_unix_ms.max(entry.due_unix_ms);
                        entry
                    }
                    None => break,
                }
            };
            // The callback may lock its conversation, so it runs without our lock held.
            if !next.cancelled.load(Ordering::SeqCst) {
                (next.task)();
                fired += 1;
            }
        }
        self.lock_state().now_unix_ms = target;
        fired
    }

    /// Callbacks scheduled and neither fired nor cancelled.
    pub fn pending_count(&self) -> usize {
        self.lock_state()
            .queue
            .iter()
            .filter(|entry| !entry.cancelled.load(Ordering::SeqCst))
            .count()
    }
}

impl ReplyScheduler for ManualReplyScheduler {
    fn now_unix_ms(&self) -> u64 {
        self.lock_state().now_unix_ms
    }

    fn schedule(&self, delay: Duration, task: ScheduledReply) -> ScheduledReplyHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let mut state = self.lock_state();
        let sequence = state.next_sequence;
        state.next_sequence = state.next_sequence.saturating_add(1);
        let due_unix_ms = state.now_unix_ms.saturating_add(delay_ms);
        state.queue.push(ManualQueueEntry {
            due_unix_ms,
            sequence,
            cancelled: Arc::clone(&cancelled),
            task,
        });
        ScheduledReplyHandle::new(cancelled, None)
    }
}

impl std::fmt::Debug for ManualReplyScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock_state();
        f.debug_struct("ManualReplyScheduler")
            .field("now_unix_ms", &state.now_unix_ms)
            .field("queued", &state.queue.len())
            .finish()
    }
}
