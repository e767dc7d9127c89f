use crate::motion::Animation;

#[cfg(feature = "hydrate")]
pub use browser::BrowserScheduler;

#[cfg(feature = "hydrate")]
mod browser {
    use std::time::Duration;

    use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};

    use crate::motion::{Scheduler, Task};

    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserScheduler;

    impl Scheduler for BrowserScheduler {
        type Handle = Option<TimeoutHandle>;

        fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
            match set_timeout_with_handle(task, delay) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::error!("couldn't arm animation timer: {e:?}");
                    None
                }
            }
        }

        fn cancel(&self, handle: Self::Handle) {
            if let Some(handle) = handle {
                handle.clear();
            }
        }
    }
}

/// Drives `animation` with browser timers for the lifetime of the current owner.
///
/// The server renders the initial frame only; timers start after hydration.
pub fn run_animation<A, F>(animation: A, on_frame: F)
where
    A: Animation,
    F: Fn(A::Frame) + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::on_cleanup;

        use crate::motion::AnimationDriver;

        let driver = AnimationDriver::start(animation, BrowserScheduler, on_frame);
        on_cleanup(move || driver.stop());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        on_frame(animation.frame());
    }
}
