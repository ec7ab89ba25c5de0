//! Producer-consumer bounded buffer, the wait/notify kata on
//! `parking_lot` primitives instead of Java's monitor methods.

use std::collections::VecDeque;

use parking_lot::{Condvar, Mutex};
use tracing::trace;

struct State<T> {
    queue: VecDeque<T>,
    closed: bool,
}

pub struct BoundedBuffer<T> {
    capacity: usize,
    state: Mutex<State<T>>,
    not_full: Condvar,
    not_empty: Condvar,
}

impl<T> BoundedBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer needs room for at least one item");
        Self {
            capacity,
            state: Mutex::new(State {
                queue: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    /// Blocks while the buffer is full. Returns the item back to the
    /// caller if the buffer was closed while waiting.
    pub fn push(&self, item: T) -> Result<(), T> {
        let mut state = self.state.lock();
        while state.queue.len() == self.capacity && !state.closed {
            self.not_full.wait(&mut state);
        }
        if state.closed {
            return Err(item);
        }
        state.queue.push_back(item);
        trace!(len = state.queue.len(), "produced");
        self.not_empty.notify_one();
        Ok(())
    }

    /// Blocks while the buffer is empty and open. `None` once the buffer
    /// is closed and drained.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.state.lock();
        while state.queue.is_empty() && !state.closed {
            self.not_empty.wait(&mut state);
        }
        let item = state.queue.pop_front();
        if item.is_some() {
            trace!(len = state.queue.len(), "consumed");
            self.not_full.notify_one();
        }
        item
    }

    /// Closes the buffer and wakes every waiter. Items already queued can
    /// still be popped.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    pub fn len(&self) -> usize {
        self.state.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
