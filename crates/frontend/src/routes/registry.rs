//! Route registry - связывает каталог маршрутов из `contracts` со страницами.

use crate::page::Page;
use crate::pages::{docs, landing, signup};
use contracts::routes::{table_for, Loader, Navigator, RouteError, RouteName, RouteTable};

pub fn build_route_table() -> Result<RouteTable<Page>, RouteError> {
    table_for(|route| match route {
        RouteName::Landing => Loader::new(landing::load),
        RouteName::Docs => Loader::new(docs::load),
        RouteName::SignUp => Loader::new(signup::load),
    })
}

/// Роутер приложения; создаётся один раз при старте и передаётся в `App`.
pub fn build_router() -> Result<Navigator<Page>, RouteError> {
    build_route_table().map(Navigator::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_every_catalog_route_is_bound_to_its_page() {
        let table = build_route_table().unwrap();
        assert_eq!(table.len(), RouteName::ALL.len());

        for route in RouteName::ALL {
            let entry = table.resolve(route.path()).unwrap();
            let page = block_on(entry.loader().load()).unwrap();
            assert_eq!(page.route(), route);
            assert!(!page.title().is_empty());
        }
    }

    #[test]
    fn test_router_reports_not_found() {
        let router = build_router().unwrap();
        let err = block_on(router.navigate("/nonexistent")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_router_navigates_to_docs() {
        let router = build_router().unwrap();
        let page = block_on(router.navigate("/docs"))
            .unwrap()
            .into_view()
            .unwrap();
        assert_eq!(page.route(), RouteName::Docs);
    }
}
