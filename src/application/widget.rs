// src/application/widget.rs
use crate::domain::DomainError;

/// Per-widget fetch lifecycle: idle until a fetch starts, then pending, then
/// either the data or a widget-local error message. Each widget owns one
/// machine; there is no shared cache or cross-widget coordination, and
/// restarting a fetch for changed parameters simply resets the machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Pending,
    Success(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn start(&mut self) {
        *self = FetchState::Pending;
    }

    pub fn resolve(&mut self, value: T) {
        *self = FetchState::Success(value);
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        *self = FetchState::Failed(message.into());
    }

    /// Collapse a finished fetch into its terminal state.
    pub fn from_result(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(value) => FetchState::Success(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
