use actix_web::web;

pub mod greeting;
pub mod health;

/// Configure application routes.
///
/// `main.rs` and the test harness both register routes through this one
/// function so the paths exercised in tests are the paths served in
/// production.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root route: the greeting endpoint
    cfg.route("/", web::get().to(greeting::root));

    // Health check route: /health
    cfg.configure(health::configure_routes);
}
