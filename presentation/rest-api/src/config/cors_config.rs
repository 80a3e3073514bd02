use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins.
///   When unset every origin is allowed.
///
/// Methods and headers are not restricted: preflights get every standard
/// method back and have their requested headers echoed.
pub fn init_cors() -> Cors {
    build_cors(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
}

fn build_cors(allowed_origins: Option<&str>) -> Cors {
    match allowed_origins {
        Some(raw) => Cors::new().allow_origins(parse_origins(raw)),
        None => Cors::new(),
    }
}

fn parse_origins(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::{
        EndpointExt,
        endpoint::make_sync,
        http::{StatusCode, header},
        test::TestClient,
    };

    #[test]
    fn should_split_and_trim_allowed_origins() {
        let origins = parse_origins("http://localhost:5173, http://localhost:3000,,");

        assert_eq!(origins, vec!["http://localhost:5173", "http://localhost:3000"]);
    }

    #[tokio::test]
    async fn should_accept_any_method_and_echo_requested_headers() {
        let cli = TestClient::new(make_sync(|_| "ok").with(build_cors(None)));

        let resp = cli
            .options("/")
            .header(header::ORIGIN, "http://shop.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "HEAD")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-requested-with")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "http://shop.example");
        resp.assert_header(header::ACCESS_CONTROL_ALLOW_HEADERS, "x-requested-with");
        let methods = resp
            .0
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        for method in ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD"] {
            assert!(methods.contains(method), "{method} missing from {methods}");
        }
    }

    #[tokio::test]
    async fn should_reject_origins_outside_configured_list() {
        let cli = TestClient::new(
            make_sync(|_| "ok").with(build_cors(Some("http://localhost:5173"))),
        );

        let resp = cli
            .get("/")
            .header(header::ORIGIN, "http://elsewhere.example")
            .send()
            .await;

        resp.assert_status(StatusCode::FORBIDDEN);
    }
}
