mod driver;
mod intro;
mod scheduler;
mod slides;
mod typewriter;

pub use driver::{Animation, AnimationDriver};
pub use intro::{IntroSequence, DEFAULT_DWELL};
pub use scheduler::{ManualHandle, ManualScheduler, Scheduler, Task};
pub use slides::{scroll_progress, select, Slide, SlideSelector, ViewportClass};
pub use typewriter::{Phase, TypewriterCycler, TypewriterTiming};
