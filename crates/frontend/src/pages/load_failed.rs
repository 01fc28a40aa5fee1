use leptos::prelude::*;

/// Показывается, когда загрузчик страницы завершился ошибкой. Повтора нет:
/// пользователь может перейти по ссылке ещё раз или обновить страницу.
#[component]
pub fn LoadFailedPage(message: String) -> impl IntoView {
    view! {
        <section class="error-message">
            <h1>"Не удалось загрузить страницу"</h1>
            <p>{message}</p>
        </section>
    }
}
