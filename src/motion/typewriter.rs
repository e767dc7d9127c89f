use std::time::Duration;

use log::trace;

use super::driver::Animation;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Paused,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    pub pause: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::from_millis(60, 40, 1200)
    }
}

impl TypewriterTiming {
    pub fn from_millis(typing: u64, deleting: u64, pause: u64) -> Self {
        Self {
            typing_speed: Duration::from_millis(typing),
            deleting_speed: Duration::from_millis(deleting),
            pause: Duration::from_millis(pause),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing_speed.is_zero() || self.pause.is_zero() || self.deleting_speed.is_zero() {
            return Err(ConfigError::InvalidTiming(
                "delays must be greater than zero".to_string(),
            ));
        }
        if self.deleting_speed >= self.typing_speed {
            return Err(ConfigError::InvalidTiming(format!(
                "deleting ({:?}) must be faster than typing ({:?})",
                self.deleting_speed, self.typing_speed
            )));
        }
        Ok(())
    }
}

/// Positions are counted in chars so the visible text never splits a code point.
#[derive(Debug, Clone)]
pub struct TypewriterCycler {
    roles: Vec<String>,
    role_lens: Vec<usize>,
    timing: TypewriterTiming,
    role_index: usize,
    sub_index: usize,
    phase: Phase,
}

impl TypewriterCycler {
    pub fn new(roles: Vec<String>, timing: TypewriterTiming) -> Result<Self, ConfigError> {
        if roles.is_empty() {
            return Err(ConfigError::EmptyRoles);
        }
        if let Some(index) = roles.iter().position(|r| r.is_empty()) {
            return Err(ConfigError::EmptyRole { index });
        }
        timing.validate()?;
        let role_lens = roles.iter().map(|r| r.chars().count()).collect();
        Ok(Self {
            roles,
            role_lens,
            timing,
            role_index: 0,
            sub_index: 0,
            phase: Phase::Typing,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn sub_index(&self) -> usize {
        self.sub_index
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn text(&self) -> &str {
        let role = &self.roles[self.role_index];
        let end = role
            .char_indices()
            .nth(self.sub_index)
            .map(|(i, _)| i)
            .unwrap_or(role.len());
        &role[..end]
    }

    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.typing_speed,
            Phase::Paused => self.timing.pause,
            Phase::Deleting => self.timing.deleting_speed,
        }
    }

    pub fn tick(&mut self) {
        let len = self.role_lens[self.role_index];
        match self.phase {
            Phase::Typing => {
                if self.sub_index < len {
                    self.sub_index += 1;
                }
                if self.sub_index == len {
                    self.phase = Phase::Paused;
                }
            }
            Phase::Paused => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.sub_index = self.sub_index.saturating_sub(1);
                if self.sub_index == 0 {
                    self.role_index = (self.role_index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        trace!(
            "typewriter role {} at {} ({:?})",
            self.role_index,
            self.sub_index,
            self.phase
        );
    }
}

impl Animation for TypewriterCycler {
    type Frame = String;

    fn delay(&self) -> Option<Duration> {
        Some(TypewriterCycler::delay(self))
    }

    fn step(&mut self) {
        self.tick();
    }

    fn frame(&self) -> String {
        self.text().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(roles: &[&str]) -> TypewriterCycler {
        let roles = roles.iter().map(|s| s.to_string()).collect();
        TypewriterCycler::new(roles, TypewriterTiming::default()).unwrap()
    }

    #[test]
    fn test_rejects_bad_roles() {
        let timing = TypewriterTiming::default();
        assert_eq!(
            TypewriterCycler::new(vec![], timing).unwrap_err(),
            ConfigError::EmptyRoles
        );
        assert_eq!(
            TypewriterCycler::new(vec!["Go".to_string(), String::new()], timing).unwrap_err(),
            ConfigError::EmptyRole { index: 1 }
        );
    }

    #[test]
    fn test_rejects_bad_timing() {
        let roles = vec!["Go".to_string()];
        let zero = TypewriterTiming::from_millis(60, 0, 1200);
        assert!(matches!(
            TypewriterCycler::new(roles.clone(), zero),
            Err(ConfigError::InvalidTiming(_))
        ));
        let slow_delete = TypewriterTiming::from_millis(40, 60, 1200);
        assert!(matches!(
            TypewriterCycler::new(roles, slow_delete),
            Err(ConfigError::InvalidTiming(_))
        ));
    }

    #[test]
    fn test_initial_state() {
        let c = cycler(&["Go", "Rust"]);
        assert_eq!(c.phase(), Phase::Typing);
        assert_eq!(c.role_index(), 0);
        assert_eq!(c.sub_index(), 0);
        assert_eq!(c.text(), "");
        assert_eq!(c.delay(), Duration::from_millis(60));
    }

    #[test]
    fn test_full_cycle() {
        let mut c = cycler(&["Go", "Rust"]);

        c.tick();
        assert_eq!(c.text(), "G");
        assert_eq!(c.phase(), Phase::Typing);
        c.tick();
        assert_eq!(c.text(), "Go");
        assert_eq!(c.phase(), Phase::Paused);
        assert_eq!(c.delay(), Duration::from_millis(1200));

        c.tick();
        assert_eq!(c.phase(), Phase::Deleting);
        assert!(c.is_deleting());
        assert_eq!(c.text(), "Go");
        assert_eq!(c.delay(), Duration::from_millis(40));

        c.tick();
        assert_eq!(c.text(), "G");
        c.tick();
        assert_eq!(c.sub_index(), 0);
        assert_eq!(c.role_index(), 1);
        assert_eq!(c.phase(), Phase::Typing);
        assert_eq!(c.text(), "");
    }

    #[test]
    fn test_wraparound_repeats_identically() {
        let mut c = cycler(&["Go", "Rust"]);
        let mut first = Vec::new();
        loop {
            first.push((c.text().to_string(), c.phase()));
            c.tick();
            if c.role_index() == 0 && c.sub_index() == 0 {
                break;
            }
        }
        // Go: 2 typed + pause + 2 deleted, Rust: 4 typed + pause + 4 deleted
        assert_eq!(first.len(), 5 + 9);

        let second = (0..first.len())
            .map(|_| {
                let frame = (c.text().to_string(), c.phase());
                c.tick();
                frame
            })
            .collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(c.role_index(), 0);
        assert_eq!(c.sub_index(), 0);
    }

    #[test]
    fn test_sub_index_stays_in_bounds() {
        let mut c = cycler(&["Frontend Developer", "Web Developer", "x"]);
        for _ in 0..500 {
            c.tick();
            let len = c.roles()[c.role_index()].chars().count();
            assert!(c.sub_index() <= len);
            if c.is_deleting() {
                assert!(c.sub_index() > 0);
            }
        }
    }

    #[test]
    fn test_multibyte_roles() {
        let mut c = cycler(&["héllo"]);
        c.tick();
        c.tick();
        assert_eq!(c.text(), "hé");
        c.tick();
        assert_eq!(c.text(), "hél");
    }

    #[test]
    fn test_single_role_loops() {
        let mut c = cycler(&["a"]);
        c.tick();
        assert_eq!(c.phase(), Phase::Paused);
        c.tick();
        c.tick();
        assert_eq!(c.phase(), Phase::Typing);
        assert_eq!(c.role_index(), 0);
        assert_eq!(c.text(), "");
    }
}
