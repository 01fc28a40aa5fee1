use super::error::RouteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Нормализованный URL-путь маршрута.
///
/// Всегда начинается с `/`, не содержит query/fragment и пустых сегментов.
/// Завершающий `/` отбрасывается везде, кроме корня: `/docs/` ≡ `/docs`.
/// Сравнение без учёта регистра (`/Docs` ≡ `/docs`), как у vue-router по
/// умолчанию; исходное написание сохраняется для вывода.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath {
    path: String,
    key: String,
}

impl RoutePath {
    pub fn root() -> Self {
        Self::normalized("/")
    }

    fn normalized(path: &str) -> Self {
        Self {
            path: path.to_string(),
            key: path.to_lowercase(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &'static str| RouteError::InvalidPath {
            path: raw.to_string(),
            reason,
        };

        let Some(rest) = raw.strip_prefix('/') else {
            return Err(if raw.is_empty() {
                invalid("path is empty")
            } else {
                invalid("path must start with '/'")
            });
        };
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid("path contains whitespace or control characters"));
        }
        if raw.contains(['?', '#']) {
            return Err(invalid("query and fragment are not part of a path"));
        }

        let segments: Vec<&str> = rest.split('/').collect();
        if let Some((last, interior)) = segments.split_last() {
            if interior.iter().any(|segment| segment.is_empty()) {
                return Err(invalid("path contains an empty segment"));
            }
            if last.is_empty() && !rest.is_empty() {
                return Ok(Self::normalized(&raw[..raw.len() - 1]));
            }
        }

        Ok(Self::normalized(raw))
    }

    /// Разбирает путь из `location`, отбрасывая `?query` и `#fragment`.
    pub fn from_location(raw: &str) -> Result<Self, RouteError> {
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        Self::parse(&raw[..end])
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl PartialEq for RoutePath {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for RoutePath {}

impl Hash for RoutePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl FromStr for RoutePath {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = RouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.path
    }
}
