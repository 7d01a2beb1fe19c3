//! App Router

use salvo::Router;

use crate::{admin, auth, catalog, greeting, healthcheck};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("catalog")
                .get(catalog::index_handler)
                .push(Router::with_path("items/{id}").get(catalog::get_handler)),
        )
        .push(
            Router::with_path("greeting")
                .get(greeting::share::handler)
                .push(Router::with_path("card.png").get(greeting::card::handler)),
        )
        .push(
            Router::with_path("admin")
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("orders")
                        .get(admin::orders::index_handler)
                        .push(Router::with_path("{id}").put(admin::orders::update_handler)),
                )
                .push(
                    Router::with_path("analytics")
                        .push(
                            Router::with_path("dashboard").get(admin::analytics::dashboard_handler),
                        )
                        .push(Router::with_path("revenue").get(admin::analytics::revenue_handler)),
                )
                .push(
                    Router::with_path("contacts")
                        .get(admin::contacts::index_handler)
                        .post(admin::contacts::create_handler),
                )
                .push(
                    Router::with_path("reviews")
                        .get(admin::reviews::index_handler)
                        .push(Router::with_path("{id}").put(admin::reviews::update_handler)),
                )
                .push(
                    Router::with_path("settings")
                        .get(admin::settings::get_handler)
                        .put(admin::settings::put_handler),
                )
                .push(
                    Router::with_path("products/{id}/hidden")
                        .put(admin::settings::hide_product_handler),
                ),
        )
}
