//! Каталог маршрутов сайта - единственный источник правды для путей и имён.
//!
//! Фронтенд привязывает к каждому маршруту загрузчик страницы, бэкенд по
//! этому же каталогу решает, отдавать ли `index.html` со статусом 200.

use super::error::RouteError;
use super::path::RoutePath;
use super::table::{Loader, RouteTable};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    Landing,
    Docs,
    SignUp,
}

impl RouteName {
    pub const ALL: [RouteName; 3] = [RouteName::Landing, RouteName::Docs, RouteName::SignUp];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::Landing => "Landing",
            RouteName::Docs => "Docs",
            RouteName::SignUp => "SignUp",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            RouteName::Landing => "/",
            RouteName::Docs => "/docs",
            RouteName::SignUp => "/signup",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Под-таблица лендингов.
pub const LANDING_ROUTES: &[RouteName] = &[RouteName::Landing];

pub const SITE_ROUTES: &[RouteName] = &[RouteName::Docs, RouteName::SignUp];

/// Маршруты в порядке объявления: сначала лендинги, затем остальные страницы.
pub fn all_routes() -> impl Iterator<Item = RouteName> {
    LANDING_ROUTES.iter().chain(SITE_ROUTES).copied()
}

/// `true`, если путь запроса после нормализации совпадает с маршрутом каталога
/// (без учёта регистра и завершающего `/`).
pub fn is_client_route(raw: &str) -> bool {
    RoutePath::from_location(raw)
        .map(|path| {
            all_routes().any(|route| RoutePath::parse(route.path()).is_ok_and(|p| p == path))
        })
        .unwrap_or(false)
}

/// Собирает таблицу каталога, запрашивая загрузчик для каждого маршрута.
pub fn table_for<V, F>(mut bind: F) -> Result<RouteTable<V>, RouteError>
where
    V: 'static,
    F: FnMut(RouteName) -> Loader<V>,
{
    let landings: Vec<_> = LANDING_ROUTES
        .iter()
        .map(|&route| (route.path().to_string(), route.as_str().to_string(), bind(route)))
        .collect();

    SITE_ROUTES
        .iter()
        .fold(RouteTable::builder().extend(landings), |builder, &route| {
            builder.route(route.path(), route.as_str(), bind(route))
        })
        .build()
}
