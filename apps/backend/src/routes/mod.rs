use actix_web::web;

use crate::error::AppError;

pub mod authors;
pub mod health;
pub mod recipes;

/// Register every route. Bearer authorization is applied per resource
/// inside the route modules, so this is the same for tests and `main`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::bad_request(format!("Invalid path parameter: {err}")).into()
    }));

    // Health check: /health
    cfg.configure(health::configure_routes);

    // Authors: /authors/**
    cfg.service(web::scope("/authors").configure(authors::configure_routes));

    // Recipes: /recipes/** (all bearer-protected)
    cfg.service(web::scope("/recipes").configure(recipes::configure_routes));
}
