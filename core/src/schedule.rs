use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

/// Source of one-shot timeouts. Dropping a handle cancels its timeout.
pub trait TimerHost {
    type Handle;

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

struct Slot<T> {
    generation: u64,
    _timer: T,
}

struct Pending<K, T> {
    slots: HashMap<K, Slot<T>>,
    next_generation: u64,
}

/// Keyed debounce: at most one pending task per key; scheduling again
/// cancels the previous timeout for that key and arms a fresh one.
pub struct CoalescingScheduler<K, H: TimerHost> {
    host: H,
    pending: Rc<RefCell<Pending<K, H::Handle>>>,
}

impl<K, H> CoalescingScheduler<K, H>
where
    K: Copy + Eq + Hash + 'static,
    H: TimerHost,
    H::Handle: 'static,
{
    pub fn new(host: H) -> Self {
        Self {
            host,
            pending: Rc::new(RefCell::new(Pending {
                slots: HashMap::new(),
                next_generation: 0,
            })),
        }
    }

    pub fn schedule(&self, key: K, delay_ms: u32, task: Rc<dyn Fn()>) {
        let generation = {
            let mut pending = self.pending.borrow_mut();
            pending.slots.remove(&key);
            pending.next_generation = pending.next_generation.wrapping_add(1);
            pending.next_generation
        };
        let pending = Rc::clone(&self.pending);
        let handle = self.host.set_timeout(
            delay_ms,
            Box::new(move || {
                let fired = {
                    let mut pending = pending.borrow_mut();
                    let current = pending
                        .slots
                        .get(&key)
                        .map(|slot| slot.generation == generation)
                        .unwrap_or(false);
                    if current {
                        pending.slots.remove(&key)
                    } else {
                        None
                    }
                };
                if let Some(slot) = fired {
                    drop(slot);
                    task();
                }
            }),
        );
        self.pending
            .borrow_mut()
            .slots
            .insert(key, Slot { generation, _timer: handle });
    }

    pub fn cancel(&self, key: K) -> bool {
        let removed = self.pending.borrow_mut().slots.remove(&key);
        removed.is_some()
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.borrow().slots.contains_key(&key)
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
