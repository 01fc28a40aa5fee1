use crate::page::Page;
use contracts::routes::{LoadError, RouteName};
use leptos::prelude::*;
use leptos_router::components::A;

pub async fn load() -> Result<Page, LoadError> {
    Ok(Page::new(RouteName::Landing, "Главная", || {
        view! { <LandingPage /> }.into_any()
    }))
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="landing">
            <div class="landing__hero">
                <h1>"Leptos Landing"</h1>
                <p class="landing__lead">
                    "Клиентское приложение на Rust и WebAssembly: маршруты, ленивые страницы и ничего лишнего."
                </p>
                <div class="landing__actions">
                    <A href=RouteName::SignUp.path()>"Зарегистрироваться"</A>
                    <A href=RouteName::Docs.path()>"Документация"</A>
                </div>
            </div>

            <ul class="landing__features">
                <li>"Таблица маршрутов собирается один раз при старте"</li>
                <li>"Страницы загружаются только при переходе на них"</li>
                <li>"Неизвестные адреса показывают страницу 404"</li>
            </ul>
        </section>
    }
}
