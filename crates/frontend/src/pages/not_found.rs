use contracts::routes::RouteName;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"Страница " <code>{path}</code> " не найдена."</p>
            <A href=RouteName::Landing.path()>"На главную"</A>
        </section>
    }
}
