//! Blocking FIFO handoff between the tree walker and the worker pool.
//!
//! The pending items and the `done` flag live behind one mutex so a worker
//! always sees them together: it can never miss a shutdown that happened
//! between checking the queue and going to sleep.

use std::collections::VecDeque;

use parking_lot::{Condvar, Mutex};

struct State<T> {
    items: VecDeque<T>,
    done: bool,
}

/// Work queue with one producer, many consumers and a shutdown signal.
pub struct WorkQueue<T> {
    state: Mutex<State<T>>,
    ready: Condvar,
}

impl<T> WorkQueue<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                items: VecDeque::new(),
                done: false,
            }),
            ready: Condvar::new(),
        }
    }

    /// Append an item and wake one waiting consumer.
    pub fn push(&self, item: T) {
        let mut state = self.state.lock();
        debug_assert!(!state.done, "push after signal_done");
        state.items.push_back(item);
        drop(state);
        self.ready.notify_one();
    }

    /// Take the front item, blocking while the queue is empty and still open.
    ///
    /// Returns `None` only once the queue is empty and `signal_done` has been
    /// called; that is the worker's signal to exit.
    pub fn pop_or_wait(&self) -> Option<T> {
        let mut state = self.state.lock();
        loop {
            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }
            if state.done {
                return None;
            }
            self.ready.wait(&mut state);
        }
    }

    /// Mark the queue finished and wake every waiting consumer.
    ///
    /// Items still queued are handed out before any consumer sees `None`.
    pub fn signal_done(&self) {
        let mut state = self.state.lock();
        if state.done {
            return;
        }
        state.done = true;
        drop(state);
        self.ready.notify_all();
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.state.lock().done
    }
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
