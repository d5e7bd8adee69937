use actix_cors::Cors;
use actix_web::http::{Method, header};

/// Builds the CORS middleware from the configured origin allow-list.
///
/// `*` allows any origin; an empty list allows same-origin requests only.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    for origin in allowed_origins
        .iter()
        .filter(|o| header::HeaderValue::from_str(o).is_ok())
    {
        cors = cors.allowed_origin(origin);
    }

    cors
}
