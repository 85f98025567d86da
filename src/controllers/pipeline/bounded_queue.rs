use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Condvar, Mutex};

/// Returned when a blocking queue operation is abandoned because the queue
/// was closed. Handled as expected control flow during shutdown, never
/// surfaced as a user-visible error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QueueClosed;

impl fmt::Display for QueueClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pipeline queue closed")
    }
}

impl Error for QueueClosed {}

struct QueueState<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// A bounded FIFO with blocking semantics on both ends: `put` waits while
/// the queue is full, `take` waits while it is empty. `close` wakes every
/// waiter; a closed queue still drains its remaining items before `take`
/// reports `QueueClosed`.
pub struct BoundedQueue<T> {
    state: Mutex<QueueState<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            state: Mutex::new(QueueState {
                items: VecDeque::with_capacity(capacity.get()),
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity: capacity.get(),
        }
    }

    /// Appends an item, blocking while the queue is at capacity. The item is
    /// dropped if the queue is closed before space becomes available.
    pub fn put(&self, item: T) -> Result<(), QueueClosed> {
        let mut state = self.state.lock().unwrap();

        loop {
            if state.closed {
                return Err(QueueClosed);
            }
            if state.items.len() < self.capacity {
                break;
            }
            state = self.not_full.wait(state).unwrap();
        }

        state.items.push_back(item);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Removes the oldest item, blocking while the queue is empty.
    pub fn take(&self) -> Result<T, QueueClosed> {
        let mut state = self.state.lock().unwrap();

        loop {
            if let Some(item) = state.items.pop_front() {
                self.not_full.notify_one();
                return Ok(item);
            }
            if state.closed {
                return Err(QueueClosed);
            }
            state = self.not_empty.wait(state).unwrap();
        }
    }

    /// Removes the oldest item if one is immediately available.
    pub fn try_take(&self) -> Option<T> {
        let mut state = self.state.lock().unwrap();
        let item = state.items.pop_front();

        if item.is_some() {
            self.not_full.notify_one();
        }

        item
    }

    /// Closes the queue and wakes all blocked producers and consumers.
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap();
        state.closed = true;
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
