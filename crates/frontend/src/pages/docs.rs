use crate::page::Page;
use contracts::routes::{all_routes, LoadError, RouteName};
use leptos::prelude::*;

pub async fn load() -> Result<Page, LoadError> {
    Ok(Page::new(RouteName::Docs, "Документация", || {
        view! { <DocsPage /> }.into_any()
    }))
}

#[component]
pub fn DocsPage() -> impl IntoView {
    view! {
        <article class="docs">
            <h1>"Документация"</h1>

            <h2>"Маршруты"</h2>
            <table class="docs__routes">
                <thead>
                    <tr>
                        <th>"Путь"</th>
                        <th>"Имя"</th>
                    </tr>
                </thead>
                <tbody>
                    {all_routes()
                        .map(|route| {
                            view! {
                                <tr>
                                    <td><code>{route.path()}</code></td>
                                    <td>{route.as_str()}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <h2>"Сборка"</h2>
            <p>
                "Фронтенд собирается командой " <code>"trunk build --release"</code>
                " в каталог " <code>"dist"</code>
                ", который раздаёт backend. Для адресов маршрутов backend отдаёт "
                <code>"index.html"</code> ", для остальных - тот же файл со статусом 404."
            </p>
        </article>
    }
}
