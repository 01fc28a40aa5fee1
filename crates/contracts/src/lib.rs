//! Общие контракты фронтенда и бэкенда: таблица маршрутов лендинга.

pub mod routes;
