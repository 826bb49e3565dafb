mod normalize_routes;

pub use normalize_routes::configure as configure_normalize_routes;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    configure_normalize_routes(cfg);
}
