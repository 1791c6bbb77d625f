//! Per-data-source load status.
//!
//! DESIGN
//! ======
//! A failed fetch still renders something (the static catalog), so the
//! `Error` state carries the value to display next to the message instead of
//! replacing it.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use crate::source::Fetched;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error { message: String, fallback: T },
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whatever should be rendered right now, if anything.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) | Self::Error { fallback: value, .. } => Some(value),
            Self::Idle | Self::Loading => None,
        }
    }

    /// Banner text for a degraded load.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Idle => LoadState::Idle,
            Self::Loading => LoadState::Loading,
            Self::Loaded(value) => LoadState::Loaded(f(value)),
            Self::Error { message, fallback } => LoadState::Error { message, fallback: f(fallback) },
        }
    }
}

impl<T> From<Fetched<T>> for LoadState<T> {
    fn from(fetched: Fetched<T>) -> Self {
        match fetched.error {
            Some(message) => Self::Error { message, fallback: fetched.value },
            None => Self::Loaded(fetched.value),
        }
    }
}
