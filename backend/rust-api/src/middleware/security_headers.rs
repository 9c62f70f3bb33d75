// Security headers middleware
// The API only serves JSON, plaintext and WebSocket upgrades, so the policy is
// locked down completely.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

const HEADERS: [(&str, &str); 4] = [
    // Prevent MIME type sniffing
    ("x-content-type-options", "nosniff"),
    // Nothing here should ever be framed
    ("x-frame-options", "DENY"),
    // No documents are served, so nothing may load
    ("content-security-policy", "default-src 'none'; frame-ancestors 'none'"),
    ("referrer-policy", "no-referrer"),
];

pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    for (name, value) in HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    response
}
