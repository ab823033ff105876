//! Trailing-edge debounce on the Tokio runtime.
//!
//! A [`Debouncer`] owns one pending slot: scheduling a callback cancels
//! whatever the slot held before. [`debounce`] goes through a single
//! process-wide slot, so unrelated callers cancel each other; use a
//! [`KeyedDebouncer`] when each logical action needs its own slot.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, OnceLock, PoisonError,
    },
    time::Duration,
};

use tokio_util::sync::CancellationToken;
use tracing::trace;

struct Pending {
    id: u64,
    token: CancellationToken,
}

type Slot = Arc<Mutex<Option<Pending>>>;

fn lock(slot: &Slot) -> MutexGuard<'_, Option<Pending>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cancels the invocation it was returned for. Does nothing once that
/// invocation has fired or been replaced.
#[derive(Clone)]
pub struct CancelHandle {
    slot: Slot,
    id: u64,
    token: CancellationToken,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let mut pending = lock(&self.slot);
        if pending.as_ref().is_some_and(|p| p.id == self.id) {
            *pending = None;
            self.token.cancel();
            trace!(id = self.id, "debounced call cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.slot).as_ref().is_some_and(|p| p.id == self.id)
    }
}

#[derive(Default)]
pub struct Debouncer {
    slot: Slot,
    next_id: AtomicU64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `callback` to run once after `delay`, replacing any call
    /// still pending on this debouncer. Must be called inside a Tokio
    /// runtime.
    pub fn debounce<F>(&self, callback: F, delay: Duration) -> CancelHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();

        {
            let mut pending = lock(&self.slot);
            if let Some(prev) = pending.take() {
                prev.token.cancel();
                trace!(id = prev.id, "debounced call replaced");
            }
            *pending = Some(Pending {
                id,
                token: token.clone(),
            });
        }

        let slot = self.slot.clone();
        let task_token = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // The slot is the source of truth: a cancel that raced
                    // the timer has already emptied or replaced it.
                    let fire = {
                        let mut pending = lock(&slot);
                        if pending.as_ref().is_some_and(|p| p.id == id) {
                            *pending = None;
                            true
                        } else {
                            false
                        }
                    };
                    if fire {
                        trace!(id, "debounced call fired");
                        callback();
                    }
                }
            }
        });

        CancelHandle {
            slot: self.slot.clone(),
            id,
            token,
        }
    }

    pub fn is_idle(&self) -> bool {
        lock(&self.slot).is_none()
    }
}

/// One independent [`Debouncer`] per key.
pub struct KeyedDebouncer<K> {
    slots: Mutex<HashMap<K, Arc<Debouncer>>>,
}

impl<K> Default for KeyedDebouncer<K> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash> KeyedDebouncer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debounce<F>(&self, key: K, callback: F, delay: Duration) -> CancelHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let debouncer = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.retain(|_, d| !d.is_idle());
            slots.entry(key).or_default().clone()
        };

        debouncer.debounce(callback, delay)
    }

    /// Number of keys with a call still pending. Idle keys are dropped.
    pub fn pending(&self) -> usize {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.retain(|_, d| !d.is_idle());
        slots.len()
    }
}

fn global() -> &'static Debouncer {
    static GLOBAL: OnceLock<Debouncer> = OnceLock::new();
    GLOBAL.get_or_init(Debouncer::new)
}

/// Process-wide debounce: every caller shares the same pending slot.
pub fn debounce<F>(callback: F, delay_ms: u64) -> CancelHandle
where
    F: FnOnce() + Send + 'static,
{
    global().debounce(callback, Duration::from_millis(delay_ms))
}
