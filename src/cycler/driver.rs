use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use super::TextCycler;

/// Single-shot delayed callbacks.
pub trait Scheduler: 'static {
    type Handle;

    /// Runs `callback` once after `delay`. Returns `None` if the timer could not be set.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

struct Shared<S: Scheduler, F> {
    cycler: TextCycler,
    scheduler: S,
    on_change: F,
    pending: Option<S::Handle>,
    // bumped on every schedule and stop; a callback only runs for its own generation
    generation: u64,
}

/// Drives a [`TextCycler`] from a [`Scheduler`].
///
/// At most one timer is pending at a time. Each tick schedules the next one
/// using the delay of the phase it leaves the cycler in. `on_change` is called
/// with the cycler whenever its displayed text changes.
///
/// Dropping the driver cancels the pending timer. A callback that fires anyway
/// finds the driver gone and does nothing.
pub struct CyclerDriver<S: Scheduler, F> {
    shared: Arc<Mutex<Shared<S, F>>>,
}

impl<S, F> CyclerDriver<S, F>
where
    S: Scheduler,
    F: FnMut(&TextCycler) + 'static,
{
    pub fn new(cycler: TextCycler, scheduler: S, on_change: F) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                cycler,
                scheduler,
                on_change,
                pending: None,
                generation: 0,
            })),
        }
    }

    /// Schedules the first tick. Does nothing if a tick is already pending.
    pub fn start(&self) {
        let mut shared = lock(&self.shared);
        if shared.pending.is_some() {
            return;
        }
        log::debug!(
            "starting text cycler over {} words",
            shared.cycler.words().len()
        );
        schedule_next(&self.shared, &mut shared);
    }

    /// Cancels the pending tick, leaving the cycler where it is.
    pub fn stop(&self) {
        let mut shared = lock(&self.shared);
        shared.generation = shared.generation.wrapping_add(1);
        if let Some(handle) = shared.pending.take() {
            log::debug!("stopping text cycler");
            shared.scheduler.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        lock(&self.shared).pending.is_some()
    }

    pub fn rendered(&self) -> String {
        lock(&self.shared).cycler.render()
    }
}

impl<S: Scheduler, F> Drop for CyclerDriver<S, F> {
    fn drop(&mut self) {
        let mut shared = lock(&self.shared);
        if let Some(handle) = shared.pending.take() {
            shared.scheduler.cancel(handle);
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

fn schedule_next<S, F>(this: &Arc<Mutex<Shared<S, F>>>, shared: &mut Shared<S, F>)
where
    S: Scheduler,
    F: FnMut(&TextCycler) + 'static,
{
    let weak = Arc::downgrade(this);
    shared.generation = shared.generation.wrapping_add(1);
    let generation = shared.generation;
    let delay = shared.cycler.delay();
    shared.pending = shared
        .scheduler
        .schedule(delay, Box::new(move || fire(weak, generation)));
    if shared.pending.is_none() {
        log::warn!("could not schedule text cycler tick, animation halted");
    }
}

fn fire<S, F>(weak: Weak<Mutex<Shared<S, F>>>, generation: u64)
where
    S: Scheduler,
    F: FnMut(&TextCycler) + 'static,
{
    let Some(this) = weak.upgrade() else {
        return;
    };
    let mut guard = lock(&this);
    let shared = &mut *guard;
    // a timer that slipped past cancellation must not tick, even after a new start()
    if shared.generation != generation || shared.pending.take().is_none() {
        return;
    }
    if shared.cycler.tick() {
        (shared.on_change)(&shared.cycler);
    }
    schedule_next(&this, shared);
}
