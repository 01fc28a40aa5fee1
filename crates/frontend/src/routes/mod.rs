//! Маршрутизация приложения
//!
//! Содержит:
//! - `registry` - привязка маршрутов каталога к загрузчикам страниц
//! - `outlet` - компонент, который отображает текущий маршрут

pub mod outlet;
pub mod registry;

pub use registry::{build_route_table, build_router};
