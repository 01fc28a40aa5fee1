use super::error::RouteError;
use super::path::RoutePath;
use super::table::RouteTable;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Итог одного перехода.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation<V> {
    /// Представление загружено, и за время загрузки не начался более новый переход.
    Completed {
        name: String,
        path: RoutePath,
        view: V,
    },
    /// Пока шла загрузка, начался более новый переход; результат отброшен.
    Superseded { name: String, path: RoutePath },
}

impl<V> Navigation<V> {
    pub fn name(&self) -> &str {
        match self {
            Navigation::Completed { name, .. } | Navigation::Superseded { name, .. } => name,
        }
    }

    pub fn path(&self) -> &RoutePath {
        match self {
            Navigation::Completed { path, .. } | Navigation::Superseded { path, .. } => path,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Navigation::Superseded { .. })
    }

    pub fn into_view(self) -> Option<V> {
        match self {
            Navigation::Completed { view, .. } => Some(view),
            Navigation::Superseded { .. } => None,
        }
    }
}

/// Router instance passed into the application composition.
///
/// Holds the frozen [`RouteTable`] plus a navigation generation counter.
/// Every call to [`Navigator::navigate`] starts a new generation; when a
/// load settles after a newer navigation has started, its result is
/// reported as [`Navigation::Superseded`] instead of being shown.
pub struct Navigator<V> {
    table: Arc<RouteTable<V>>,
    generation: Arc<AtomicU64>,
}

impl<V> Clone for Navigator<V> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<V> fmt::Debug for Navigator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("table", &self.table)
            .field("generation", &self.current_generation())
            .finish()
    }
}

impl<V: 'static> Navigator<V> {
    pub fn new(table: RouteTable<V>) -> Self {
        Self {
            table: Arc::new(table),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn navigate(&self, path: &str) -> Result<Navigation<V>, RouteError> {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        let entry = self.table.resolve(path).map_err(|err| {
            log::warn!("navigation #{} to '{}' failed: {}", generation, path, err);
            err
        })?;
        let name = entry.name().to_string();
        let route_path = entry.path().clone();
        let loader = entry.loader().clone();

        log::debug!("navigation #{} → {} ({})", generation, route_path, name);
        let loaded = loader.load().await;

        if self.current_generation() != generation {
            log::warn!(
                "navigation #{} to {} superseded by #{}",
                generation,
                route_path,
                self.current_generation()
            );
            return Ok(Navigation::Superseded {
                name,
                path: route_path,
            });
        }

        match loaded {
            Ok(view) => {
                log::debug!("navigation #{} completed: {}", generation, name);
                Ok(Navigation::Completed {
                    name,
                    path: route_path,
                    view,
                })
            }
            Err(source) => {
                log::warn!("navigation #{} failed to load {}: {}", generation, name, source);
                Err(RouteError::LoadFailure { name, source })
            }
        }
    }
}

impl<V> Navigator<V> {
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::error::LoadError;
    use crate::routes::table::Loader;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::sync::Mutex;

    fn navigator() -> Navigator<&'static str> {
        let table = RouteTable::builder()
            .route("/", "Landing", Loader::new(|| async { Ok("landing") }))
            .route(
                "/docs",
                "Docs",
                Loader::new(|| async { Err(LoadError::new("chunk fetch failed")) }),
            )
            .build()
            .unwrap();
        Navigator::new(table)
    }

    #[test]
    fn test_navigate_completes() {
        let nav = navigator();
        let result = block_on(nav.navigate("/")).unwrap();
        assert_eq!(result.name(), "Landing");
        assert_eq!(result.path().as_str(), "/");
        assert_eq!(result.into_view(), Some("landing"));
        assert_eq!(nav.current_generation(), 1);
    }

    #[test]
    fn test_navigate_unresolved() {
        let nav = navigator();
        let err = block_on(nav.navigate("/nonexistent")).unwrap_err();
        assert!(err.is_not_found());
        // unresolved navigation still counts as a newer navigation
        assert_eq!(nav.current_generation(), 1);
    }

    #[test]
    fn test_navigate_load_failure() {
        let nav = navigator();
        let err = block_on(nav.navigate("/docs")).unwrap_err();
        assert_eq!(
            err,
            RouteError::LoadFailure {
                name: "Docs".to_string(),
                source: LoadError::new("chunk fetch failed"),
            }
        );
    }

    #[test]
    fn test_repeated_navigation_reloads() {
        let nav = navigator();
        for _ in 0..2 {
            let result = block_on(nav.navigate("/")).unwrap();
            assert!(!result.is_superseded());
        }
        assert_eq!(nav.current_generation(), 2);
    }

    #[test]
    fn test_latest_navigation_wins() {
        let (release, gate) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(gate)));

        let table = RouteTable::builder()
            .route(
                "/signup",
                "SignUp",
                Loader::new(move || {
                    let gate = gate.lock().unwrap().take();
                    async move {
                        if let Some(gate) = gate {
                            gate.await.map_err(|_| LoadError::new("gate dropped"))?;
                        }
                        Ok("signup")
                    }
                }),
            )
            .route("/", "Landing", Loader::new(|| async { Ok("landing") }))
            .build()
            .unwrap();
        let nav = Navigator::new(table);

        block_on(async {
            let mut slow = Box::pin(nav.navigate("/signup"));
            assert!(futures::poll!(slow.as_mut()).is_pending());

            let fast = nav.navigate("/").await.unwrap();
            assert_eq!(fast.into_view(), Some("landing"));

            release.send(()).unwrap();
            let slow = slow.await.unwrap();
            assert!(slow.is_superseded());
            assert_eq!(slow.name(), "SignUp");
        });
    }
}
