pub mod app;
pub mod layout;
pub mod page;
pub mod pages;
pub mod routes;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

/// Id элемента в `index.html`, к которому монтируется приложение.
const ROOT_ELEMENT_ID: &str = "app";

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let router = match routes::build_router() {
        Ok(router) => router,
        Err(e) => {
            log::error!("Route table rejected: {}", e);
            return;
        }
    };
    log::info!("Router installed with {} routes", router.table().len());

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => {
            leptos::mount::mount_to(root, move || view! { <App router=router /> }).forget();
        }
        None => {
            log::warn!("#{} not found, mounting to <body>", ROOT_ELEMENT_ID);
            leptos::mount::mount_to_body(move || view! { <App router=router /> });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
