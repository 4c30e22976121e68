use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashSet},
};

/// Identifies one scheduled timer. Never reused within a queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// The "call me after N seconds" facility. `K` is whatever the caller needs
/// handed back when the timer fires.
pub trait TaskScheduler<K> {
    fn schedule_after(&mut self, delay: f64, key: K) -> TimerHandle;
    /// Returns whether the timer was still pending
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

struct TimerEntry<K> {
    deadline: f64,
    handle: TimerHandle,
    key: K,
}

// Min-heap on (deadline, handle): earliest first, ties in scheduling order
impl<K> Ord for TimerEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .total_cmp(&self.deadline)
            .then_with(|| other.handle.cmp(&self.handle))
    }
}

impl<K> PartialOrd for TimerEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> PartialEq for TimerEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<K> Eq for TimerEntry<K> {}

/// Timers ordered by absolute deadline, in seconds of whatever clock the
/// owner measures against.
///
/// Cancelled entries stay in the heap until they reach the front and are
/// skipped there.
pub struct TimerQueue<K> {
    next_handle: u64,
    heap: BinaryHeap<TimerEntry<K>>,
    live: HashSet<TimerHandle>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            heap: BinaryHeap::new(),
            live: HashSet::new(),
        }
    }

    pub fn schedule_at(&mut self, deadline: f64, key: K) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        self.heap.push(TimerEntry {
            deadline,
            handle,
            key,
        });
        self.live.insert(handle);
        handle
    }

    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.live.remove(&handle)
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.live.contains(&handle)
    }

    /// Pops the earliest live timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: f64) -> Option<(TimerHandle, K)> {
        loop {
            let entry = self.heap.peek()?;
            if !self.live.contains(&entry.handle) {
                self.heap.pop();
                continue;
            }
            if entry.deadline > now {
                return None;
            }
            let entry = self.heap.pop()?;
            self.live.remove(&entry.handle);
            return Some((entry.handle, entry.key));
        }
    }

    /// Deadline of the earliest live timer.
    pub fn next_deadline(&self) -> Option<f64> {
        self.heap
            .iter()
            .filter(|entry| self.live.contains(&entry.handle))
            .map(|entry| entry.deadline)
            .min_by(f64::total_cmp)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
    }
}
