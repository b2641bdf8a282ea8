use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Handle returned by [`TimerQueue::schedule`], usable for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// An entry handed back by [`TimerQueue::pop_due`].
#[derive(Clone, Debug, PartialEq)]
pub struct Fired<A> {
    pub id: TimerId,
    /// Scheduled time; actions run "as of" this instant even when drained late.
    pub fire_at: f64,
    pub action: A,
}

struct Entry<A> {
    fire_at: f64,
    id: TimerId,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    // Reversed so the max-heap yields the earliest entry; ids break ties FIFO.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fire_at
            .total_cmp(&self.fire_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Deterministic queue of `(fire_at, action)` entries driven by an external clock.
///
/// Nothing fires on its own: the owner drains due entries with [`TimerQueue::pop_due`]
/// once per tick, which keeps timer-driven state machines replayable under a virtual clock.
pub struct TimerQueue<A> {
    heap: BinaryHeap<Entry<A>>,
    next_id: u64,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, fire_at: f64, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.heap.push(Entry {
            fire_at,
            id,
            action,
        });
        id
    }

    /// Remove a pending entry. Returns `false` when it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.heap.len();
        self.heap.retain(|e| e.id != id);
        self.heap.len() != before
    }

    /// Pop the earliest entry whose `fire_at <= now`.
    pub fn pop_due(&mut self, now: f64) -> Option<Fired<A>> {
        if self.heap.peek()?.fire_at > now {
            return None;
        }
        self.heap.pop().map(|e| Fired {
            id: e.id,
            fire_at: e.fire_at,
            action: e.action,
        })
    }

    pub fn next_fire_at(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.fire_at)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<A> std::fmt::Debug for TimerQueue<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.heap.len())
            .field("next_fire_at", &self.next_fire_at())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timers.rs"]
mod tests;
