//! Timer system for dixt.
//!
//! Provides single-shot deferred timers with cancel-by-handle. Widgets that
//! animate (such as spinners) chain these: every fire that does work arms the
//! next one, so cancellation only ever has to invalidate one pending handle.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, TimerError};

new_key_type! {
    /// A unique identifier for a pending timer.
    ///
    /// Ids are never reused while the manager lives, so a stale id held by a
    /// widget can never alias a newer timer.
    pub struct TimerId;
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should fire.
    fire_time: Instant,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
    /// Insertion sequence, so timers due at the same instant fire in order.
    seq: u64,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time && self.seq == other.seq
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other
            .fire_time
            .cmp(&self.fire_time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Canceled entries tolerated in the queue before it is rebuilt.
const STALE_ENTRY_LIMIT: usize = 64;

/// Manages all pending single-shot timers.
pub struct TimerManager {
    /// All pending timers. A timer leaves this map when it fires or is canceled.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
    next_seq: u64,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Start a one-shot timer that fires after the specified duration.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        self.start_one_shot_at(Instant::now() + duration)
    }

    /// Start a one-shot timer that fires at `fire_time`.
    pub fn start_one_shot_at(&mut self, fire_time: Instant) -> TimerId {
        let id = self.timers.insert(TimerData { fire_time });
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(TimerQueueEntry { id, fire_time, seq });

        tracing::trace!(target: "dixt_core::timer", ?id, "timer scheduled");
        id
    }

    /// Cancel a pending timer.
    ///
    /// Returns `Ok(())` if the timer was pending, or an error if it already
    /// fired, was already canceled, or never existed.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if self.timers.remove(id).is_some() {
            tracing::trace!(target: "dixt_core::timer", ?id, "timer canceled");
            self.discard_stale_entries();
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Get the duration until the next timer fires, if any.
    ///
    /// Returns `None` if there are no pending timers.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.discard_canceled_front();

        self.queue.peek().map(|entry| {
            entry
                .fire_time
                .saturating_duration_since(Instant::now())
        })
    }

    /// Process all timers that should fire now.
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        self.process_expired_at(Instant::now())
    }

    /// Process all timers due at or before `now`.
    ///
    /// Returns the ids of fired timers in fire order. Fired timers are
    /// removed; canceled entries still in the queue are skipped.
    #[tracing::instrument(skip(self), target = "dixt_core::timer", level = "trace")]
    pub fn process_expired_at(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            // Canceled timers leave a stale queue entry behind.
            let Some(timer) = self.timers.get(entry.id) else {
                continue;
            };
            if timer.fire_time != entry.fire_time {
                continue;
            }

            self.timers.remove(entry.id);
            tracing::trace!(target: "dixt_core::timer", id = ?entry.id, "timer fired");
            fired.push(entry.id);
        }

        fired
    }

    /// Get the number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Drop canceled entries once they outnumber pending timers and exceed
    /// [`STALE_ENTRY_LIMIT`].
    fn discard_stale_entries(&mut self) {
        let stale = self.queue.len().saturating_sub(self.timers.len());
        if stale <= STALE_ENTRY_LIMIT || stale <= self.timers.len() {
            return;
        }
        let timers = &self.timers;
        self.queue.retain(|entry| {
            timers
                .get(entry.id)
                .is_some_and(|timer| timer.fire_time == entry.fire_time)
        });
        tracing::trace!(target: "dixt_core::timer", discarded = stale, "timer queue compacted");
    }

    fn discard_canceled_front(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-shot deferred-callback scheduling with cancel-by-handle.
///
/// This is the seam between animated widgets and whatever event loop drives
/// them. The event loop is expected to deliver each fired [`TimerId`] back to
/// the widget that scheduled it.
pub trait Scheduler: Send + Sync {
    /// Arrange for a single fire after `delay`.
    fn schedule_once(&self, delay: Duration) -> TimerId;

    /// Cancel a pending fire. Returns `true` if the timer was still pending.
    fn cancel(&self, id: TimerId) -> bool;

    /// Check whether a timer is still pending.
    fn is_pending(&self, id: TimerId) -> bool;
}

/// A thread-safe wrapper around `TimerManager` for use from the application.
pub struct SharedTimerManager {
    inner: Mutex<TimerManager>,
}

impl SharedTimerManager {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TimerManager::new()),
        }
    }

    pub fn start_one_shot(&self, duration: Duration) -> TimerId {
        self.inner.lock().start_one_shot(duration)
    }

    pub fn stop(&self, id: TimerId) -> Result<()> {
        self.inner.lock().stop(id)
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    pub fn process_expired(&self) -> Vec<TimerId> {
        self.inner.lock().process_expired()
    }

    pub fn process_expired_at(&self, now: Instant) -> Vec<TimerId> {
        self.inner.lock().process_expired_at(now)
    }

    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }
}

impl Default for SharedTimerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SharedTimerManager {
    fn schedule_once(&self, delay: Duration) -> TimerId {
        self.start_one_shot(delay)
    }

    fn cancel(&self, id: TimerId) -> bool {
        self.stop(id).is_ok()
    }

    fn is_pending(&self, id: TimerId) -> bool {
        self.is_active(id)
    }
}
