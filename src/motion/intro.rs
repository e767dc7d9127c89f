use std::time::Duration;

use super::driver::Animation;

pub const DEFAULT_DWELL: Duration = Duration::from_millis(400);

/// Flashes each greeting for a fixed dwell time, then finishes.
#[derive(Debug, Clone)]
pub struct IntroSequence {
    greetings: Vec<String>,
    dwell: Duration,
    index: usize,
}

impl IntroSequence {
    pub fn new(greetings: Vec<String>, dwell: Duration) -> Self {
        Self {
            greetings,
            dwell,
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.greetings.get(self.index).map(String::as_str)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.greetings.len()
    }
}

impl Animation for IntroSequence {
    type Frame = Option<String>;

    fn delay(&self) -> Option<Duration> {
        (!self.is_finished()).then_some(self.dwell)
    }

    fn step(&mut self) {
        if !self.is_finished() {
            self.index += 1;
        }
    }

    fn frame(&self) -> Option<String> {
        self.current().map(str::to_string)
    }
}
