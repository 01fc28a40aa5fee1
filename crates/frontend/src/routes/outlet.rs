//! RouteOutlet - отображает страницу текущего маршрута
//!
//! На каждое изменение `location.pathname` запускается `Navigator::navigate`.
//! Пока загрузчик не завершился, показывается индикатор загрузки. Результат
//! устаревшего перехода приходит как `Navigation::Superseded` и игнорируется.

use crate::page::Page;
use crate::pages::load_failed::LoadFailedPage;
use crate::pages::not_found::NotFoundPage;
use contracts::routes::{Navigation, Navigator, RouteError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use thaw::Spinner;

#[derive(Debug, Clone, PartialEq)]
pub enum OutletState {
    Loading,
    Ready(Page),
    NotFound(String),
    Failed(String),
}

impl OutletState {
    /// `None` для устаревшего перехода: состояние выставит более новый.
    pub fn from_navigation(result: Result<Navigation<Page>, RouteError>) -> Option<Self> {
        match result {
            Ok(Navigation::Completed { view, .. }) => Some(OutletState::Ready(view)),
            Ok(Navigation::Superseded { .. }) => None,
            Err(RouteError::UnresolvedPath { path }) | Err(RouteError::InvalidPath { path, .. }) => {
                Some(OutletState::NotFound(path))
            }
            Err(err) => Some(OutletState::Failed(err.to_string())),
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            OutletState::Loading => None,
            OutletState::Ready(page) => Some(page.title()),
            OutletState::NotFound(_) => Some("Страница не найдена"),
            OutletState::Failed(_) => Some("Ошибка загрузки"),
        }
    }
}

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let router = expect_context::<Navigator<Page>>();
    let location = use_location();
    let (state, set_state) = signal(OutletState::Loading);

    Effect::new(move |_| {
        let path = location.pathname.get();
        let router = router.clone();
        set_state.set(OutletState::Loading);

        spawn_local(async move {
            let result = router.navigate(&path).await;
            if let Some(next) = OutletState::from_navigation(result) {
                if let Some(title) = next.title() {
                    set_document_title(title);
                }
                set_state.set(next);
            }
        });
    });

    view! {
        {move || match state.get() {
            OutletState::Loading => view! {
                <div class="route-loading">
                    <Spinner />
                </div>
            }
            .into_any(),
            OutletState::Ready(page) => page.render(),
            OutletState::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
            OutletState::Failed(message) => view! { <LoadFailedPage message=message /> }.into_any(),
        }}
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} · Leptos Landing", title));
    }
}
