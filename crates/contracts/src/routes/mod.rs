//! Client-side routing core
//!
//! Содержит:
//! - `path` - валидация и нормализация URL-путей (`RoutePath`)
//! - `table` - неизменяемая таблица маршрутов с ленивыми загрузчиками
//! - `navigator` - навигация поверх таблицы (последний переход побеждает)
//! - `catalog` - единственный источник правды для путей и имён маршрутов сайта
//! - `error` - ошибки маршрутизации

pub mod catalog;
pub mod error;
pub mod navigator;
pub mod path;
pub mod table;

pub use catalog::{all_routes, is_client_route, table_for, RouteName, LANDING_ROUTES, SITE_ROUTES};
pub use error::{LoadError, RouteError};
pub use navigator::{Navigation, Navigator};
pub use path::RoutePath;
pub use table::{Loader, RouteEntry, RouteTable, RouteTableBuilder};
