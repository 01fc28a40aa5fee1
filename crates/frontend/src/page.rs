use contracts::routes::RouteName;
use leptos::prelude::*;
use std::fmt;

/// Загруженная страница маршрута: то, что отдаёт загрузчик из таблицы.
#[derive(Clone, Copy)]
pub struct Page {
    route: RouteName,
    title: &'static str,
    render: fn() -> AnyView,
}

impl Page {
    pub const fn new(route: RouteName, title: &'static str, render: fn() -> AnyView) -> Self {
        Self {
            route,
            title,
            render,
        }
    }

    pub fn route(&self) -> RouteName {
        self.route
    }

    /// Заголовок вкладки браузера.
    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn render(&self) -> AnyView {
        (self.render)()
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("route", &self.route)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.route == other.route && self.title == other.title
    }
}
