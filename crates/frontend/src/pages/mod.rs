//! Страницы сайта. Каждая страница маршрута отдаёт асинхронный `load()`,
//! который регистрируется в `routes::registry`.

pub mod docs;
pub mod landing;
pub mod load_failed;
pub mod not_found;
pub mod signup;
