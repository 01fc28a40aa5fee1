use crate::layout::TopNav;
use crate::page::Page;
use crate::routes::outlet::RouteOutlet;
use contracts::routes::Navigator;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

/// Корневой компонент. Роутер передаётся явно и раздаётся дочерним
/// компонентам через context.
#[component]
pub fn App(router: Navigator<Page>) -> impl IntoView {
    provide_context(router);

    view! {
        <ConfigProvider>
            <Router>
                <div class="site">
                    <TopNav />
                    <main class="site__content">
                        <RouteOutlet />
                    </main>
                </div>
            </Router>
        </ConfigProvider>
    }
}
