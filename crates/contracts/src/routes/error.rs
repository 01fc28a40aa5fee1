use thiserror::Error;

/// Ошибка ленивой загрузки представления маршрута.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("no route matches '{path}'")]
    UnresolvedPath { path: String },

    #[error("duplicate route path '{path}'")]
    DuplicatePath { path: String },

    #[error("duplicate route name '{name}'")]
    DuplicateName { name: String },

    #[error("failed to load route '{name}': {source}")]
    LoadFailure { name: String, source: LoadError },
}

impl RouteError {
    /// `true` для переходов, которым не соответствует ни один маршрут.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::UnresolvedPath { .. })
    }
}
