//! Route table - неизменяемый маппинг `path → (name, loader)`
//!
//! Таблица собирается один раз при старте приложения через
//! [`RouteTableBuilder`] и после `build()` не меняется.

use super::error::{LoadError, RouteError};
use super::path::RoutePath;
use futures::future::{FutureExt, LocalBoxFuture};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type LoadFn<V> = dyn Fn() -> LocalBoxFuture<'static, Result<V, LoadError>> + Send + Sync;

/// Ленивая фабрика представления маршрута.
///
/// Каждый вызов [`Loader::load`] запускает загрузку заново, результат не кешируется.
/// Сама фабрика разделяемая, а возвращаемый future может быть `!Send`:
/// он исполняется в UI-потоке.
pub struct Loader<V> {
    factory: Arc<LoadFn<V>>,
}

impl<V: 'static> Loader<V> {
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, LoadError>> + 'static,
    {
        Self {
            factory: Arc::new(move || factory().boxed_local()),
        }
    }

    pub fn load(&self) -> LocalBoxFuture<'static, Result<V, LoadError>> {
        (self.factory)()
    }
}

impl<V> Clone for Loader<V> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<V> fmt::Debug for Loader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader").finish_non_exhaustive()
    }
}

pub struct RouteEntry<V> {
    path: RoutePath,
    name: String,
    loader: Loader<V>,
}

impl<V> RouteEntry<V> {
    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn loader(&self) -> &Loader<V> {
        &self.loader
    }
}

impl<V> Clone for RouteEntry<V> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            name: self.name.clone(),
            loader: self.loader.clone(),
        }
    }
}

impl<V> fmt::Debug for RouteEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Собирает таблицу в порядке объявления; проверки выполняются в `build()`.
pub struct RouteTableBuilder<V> {
    pending: Vec<(String, String, Loader<V>)>,
}

impl<V> RouteTableBuilder<V> {
    pub fn route(mut self, path: &str, name: &str, loader: Loader<V>) -> Self {
        self.pending.push((path.to_string(), name.to_string(), loader));
        self
    }

    /// Добавляет под-таблицу (например, лендинги) целиком.
    pub fn extend<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = (String, String, Loader<V>)>,
    {
        self.pending.extend(routes);
        self
    }

    pub fn build(self) -> Result<RouteTable<V>, RouteError> {
        let mut entries = Vec::with_capacity(self.pending.len());
        let mut by_path = HashMap::with_capacity(self.pending.len());
        let mut names = HashSet::with_capacity(self.pending.len());

        for (raw_path, name, loader) in self.pending {
            let path = RoutePath::parse(&raw_path)?;
            if by_path.contains_key(&path) {
                return Err(RouteError::DuplicatePath {
                    path: path.to_string(),
                });
            }
            if !names.insert(name.clone()) {
                return Err(RouteError::DuplicateName { name });
            }
            by_path.insert(path.clone(), entries.len());
            entries.push(RouteEntry { path, name, loader });
        }

        Ok(RouteTable { entries, by_path })
    }
}

pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    by_path: HashMap<RoutePath, usize>,
}

impl<V> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder {
            pending: Vec::new(),
        }
    }

    /// Сопоставление по нормализованному пути, без учёта регистра.
    pub fn resolve(&self, path: &str) -> Result<&RouteEntry<V>, RouteError> {
        let path = RoutePath::parse(path)?;
        self.lookup(&path).ok_or_else(|| RouteError::UnresolvedPath {
            path: path.to_string(),
        })
    }

    pub fn lookup(&self, path: &RoutePath) -> Option<&RouteEntry<V>> {
        self.by_path.get(path).map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
