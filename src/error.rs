use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("slide selector needs at least one slide")]
    EmptySlides,
    #[error("typewriter role list is empty")]
    EmptyRoles,
    #[error("typewriter role {index} is an empty string")]
    EmptyRole { index: usize },
    #[error("invalid typewriter timing: {0}")]
    InvalidTiming(String),
    #[error("couldn't load site content: {0}")]
    Content(String),
}
