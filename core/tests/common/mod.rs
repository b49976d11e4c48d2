#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use galleria_core::TimerHost;

struct Entry {
    id: u64,
    due_ms: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Deterministic timer host driven by `advance`.
#[derive(Clone, Default)]
pub struct ManualTimers {
    queue: Rc<RefCell<Queue>>,
}

pub struct ManualHandle {
    id: u64,
    queue: Rc<RefCell<Queue>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Ok(mut queue) = self.queue.try_borrow_mut() {
            queue.entries.retain(|entry| entry.id != self.id);
        }
    }
}

impl TimerHost for ManualTimers {
    type Handle = ManualHandle;

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let id = queue.next_id;
        let due_ms = queue.now_ms + delay_ms as u64;
        queue.entries.push(Entry {
            id,
            due_ms,
            callback,
        });
        ManualHandle {
            id,
            queue: Rc::clone(&self.queue),
        }
    }
}

impl ManualTimers {
    pub fn now(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Moves time forward, firing due callbacks in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due_ms <= target)
                    .min_by_key(|(_, entry)| (entry.due_ms, entry.id))
                    .map(|(position, _)| position);
                match position {
                    Some(position) => {
                        let entry = queue.entries.remove(position);
                        queue.now_ms = entry.due_ms;
                        Some(entry.callback)
                    }
                    None => {
                        queue.now_ms = target;
                        None
                    }
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
    }
}

/// Pass stand-in that records when it ran.
#[derive(Clone, Default)]
pub struct PassLog {
    runs: Rc<RefCell<Vec<u64>>>,
    count: Rc<Cell<usize>>,
}

impl PassLog {
    pub fn callback(&self, timers: &ManualTimers) -> Rc<dyn Fn()> {
        let runs = Rc::clone(&self.runs);
        let count = Rc::clone(&self.count);
        let timers = timers.clone();
        Rc::new(move || {
            runs.borrow_mut().push(timers.now());
            count.set(count.get() + 1);
        })
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn runs(&self) -> Vec<u64> {
        self.runs.borrow().clone()
    }
}
