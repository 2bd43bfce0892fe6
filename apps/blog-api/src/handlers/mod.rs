//! HTTP handlers and route configuration.

mod admin;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_config, path_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Posts; writes require an admin session
                .service(
                    web::scope("/blogs")
                        .service(
                            web::resource("")
                                .route(web::get().to(posts::list_posts))
                                .route(web::post().to(posts::create_post)),
                        )
                        .route("/thisweek", web::get().to(posts::latest_per_category))
                        .service(
                            web::resource("/{key}")
                                .route(web::get().to(posts::get_post))
                                .route(web::put().to(posts::update_post))
                                .route(web::delete().to(posts::delete_post)),
                        ),
                )
                // Admin session routes
                .service(
                    web::scope("/admin")
                        .route("/login", web::post().to(admin::login))
                        .route("/protected", web::get().to(admin::protected))
                        .route("/logout", web::get().to(admin::logout)),
                ),
        );
}
