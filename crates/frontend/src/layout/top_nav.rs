//! TopNav - верхняя навигационная панель сайта.

use contracts::routes::{all_routes, RouteName};
use leptos::prelude::*;
use leptos_router::components::A;

/// Подпись ссылки в меню для маршрута каталога.
pub fn nav_label(route: RouteName) -> &'static str {
    match route {
        RouteName::Landing => "Главная",
        RouteName::Docs => "Документация",
        RouteName::SignUp => "Регистрация",
    }
}

#[component]
pub fn TopNav() -> impl IntoView {
    view! {
        <header class="top-nav">
            <span class="top-nav__brand">
                <A href=RouteName::Landing.path()>"Leptos Landing"</A>
            </span>
            <nav class="top-nav__links">
                {all_routes()
                    .filter(|route| *route != RouteName::Landing)
                    .map(|route| {
                        view! {
                            <span class="top-nav__link">
                                <A href=route.path()>{nav_label(route)}</A>
                            </span>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
