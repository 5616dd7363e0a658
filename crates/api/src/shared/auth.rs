use actix_web::HttpRequest;
use tracing::debug;

const PRINCIPAL_HEADER: &str = "x-agenda-principal";

/// The authenticated principal attached to the request, when any.
///
/// Authentication is an external collaborator: this surface only
/// observes whether a principal is present and never rejects a
/// request over it.
pub fn current_principal(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(PRINCIPAL_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

pub fn log_principal(req: &HttpRequest) {
    match current_principal(req) {
        Some(principal) => debug!("Request principal: {}", principal),
        None => debug!("Request without principal"),
    }
}
