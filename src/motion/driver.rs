use std::{
    sync::{Arc, Mutex, Weak},
    time::Duration,
};

use log::debug;

use super::scheduler::Scheduler;

/// A timed state machine: wait `delay`, then `step`.
pub trait Animation: Send + 'static {
    type Frame: 'static;

    fn delay(&self) -> Option<Duration>;
    fn step(&mut self);
    fn frame(&self) -> Self::Frame;
}

struct DriverState<A, H> {
    animation: A,
    pending: Option<H>,
    stopped: bool,
}

struct Shared<A: Animation, S: Scheduler> {
    scheduler: S,
    state: Mutex<DriverState<A, S::Handle>>,
    on_frame: Box<dyn Fn(A::Frame) + Send + Sync>,
}

/// Runs an [`Animation`] off a [`Scheduler`], keeping at most one timer armed.
///
/// The pending timer is cancelled by [`AnimationDriver::stop`] or when the driver
/// is dropped, so no transition can fire after teardown.
pub struct AnimationDriver<A: Animation, S: Scheduler> {
    shared: Arc<Shared<A, S>>,
}

impl<A: Animation, S: Scheduler> AnimationDriver<A, S> {
    pub fn start<F>(animation: A, scheduler: S, on_frame: F) -> Self
    where
        F: Fn(A::Frame) + Send + Sync + 'static,
    {
        let initial = animation.frame();
        let shared = Arc::new(Shared {
            scheduler,
            state: Mutex::new(DriverState {
                animation,
                pending: None,
                stopped: false,
            }),
            on_frame: Box::new(on_frame),
        });
        (shared.on_frame)(initial);
        Shared::arm(&shared);
        Self { shared }
    }

    pub fn stop(&self) {
        let pending = {
            let mut state = self.shared.lock();
            state.stopped = true;
            state.pending.take()
        };
        if let Some(handle) = pending {
            self.shared.scheduler.cancel(handle);
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        let state = self.shared.lock();
        !state.stopped && state.pending.is_some()
    }

    #[cfg(test)]
    pub fn with_animation<R>(&self, f: impl FnOnce(&A) -> R) -> R {
        f(&self.shared.lock().animation)
    }
}

impl<A: Animation, S: Scheduler> Drop for AnimationDriver<A, S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<A: Animation, S: Scheduler> Shared<A, S> {
    fn lock(&self) -> std::sync::MutexGuard<'_, DriverState<A, S::Handle>> {
        self.state.lock().expect("should be able to lock animation state")
    }

    fn arm(this: &Arc<Self>) {
        let delay = {
            let state = this.lock();
            if state.stopped {
                return;
            }
            state.animation.delay()
        };
        let Some(delay) = delay else {
            debug!("animation finished");
            return;
        };
        let weak: Weak<Self> = Arc::downgrade(this);
        let handle = this.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    Shared::fire(&shared);
                }
            }),
        );
        let mut state = this.lock();
        if state.stopped {
            drop(state);
            this.scheduler.cancel(handle);
            return;
        }
        state.pending = Some(handle);
    }

    fn fire(this: &Arc<Self>) {
        let frame = {
            let mut state = this.lock();
            if state.stopped {
                return;
            }
            state.pending = None;
            state.animation.step();
            state.animation.frame()
        };
        (this.on_frame)(frame);
        Shared::arm(this);
    }
}
