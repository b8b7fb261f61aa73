use super::{identity::Identity, jwt::JwtAuth};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Extract a bearer token from the Authorization header, falling back to the
/// `access_token` cookie
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
        .or_else(|| {
            headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        let (name, value) = cookie.trim().split_once('=')?;
                        (name == ACCESS_TOKEN_COOKIE).then_some(value)
                    })
                })
        })
}

/// Attach a verified [`Identity`] to the request when a valid token is present.
///
/// Requests without a token, or with an invalid one, continue anonymously;
/// handlers that need a caller take `Identity` as an extractor.
///
/// ```ignore
/// let app = Router::new()
///     .route("/user/admin/{email}", get(is_admin))
///     .layer(axum::middleware::from_fn_with_state(jwt_auth, identity_middleware));
/// ```
pub async fn identity_middleware(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = match extract_token(request.headers()) {
        Some(token) => match auth.verify(token) {
            Ok(claims) => Some(Identity::from(claims)),
            Err(e) => {
                tracing::debug!("Identity token rejected: {}", e);
                None
            }
        },
        None => None,
    };

    if let Some(identity) = identity {
        request.extensions_mut().insert(identity);
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use axum::{Router, body::Body, http::Request as HttpRequest, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("middleware-test-secret-with-32-characters").unwrap())
    }

    fn app(auth: JwtAuth) -> Router {
        Router::new()
            .route("/me", get(|identity: Identity| async move { identity.email }))
            .route("/open", get(|| async { "open" }))
            .layer(axum::middleware::from_fn_with_state(auth, identity_middleware))
    }

    async fn call(app: Router, uri: &str, header: Option<(&str, String)>) -> (StatusCode, String) {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_extract_token_prefers_authorization_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer abc".parse().unwrap());
        headers.insert(header::COOKIE, "access_token=def".parse().unwrap());
        assert_eq!(extract_token(&headers), Some("abc"));
    }

    #[test]
    fn test_extract_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "theme=dark; access_token=def".parse().unwrap());
        assert_eq!(extract_token(&headers), Some("def"));
    }

    #[tokio::test]
    async fn test_valid_token_attaches_identity() {
        let auth = auth();
        let token = auth.issue("u1", "a@x.com").unwrap();
        let (status, body) = call(app(auth), "/me", Some(("authorization", format!("Bearer {}", token)))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "a@x.com");
    }

    #[tokio::test]
    async fn test_missing_token_rejected_only_where_identity_required() {
        let (status, _) = call(app(auth()), "/me", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = call(app(auth()), "/open", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "open");
    }

    #[tokio::test]
    async fn test_invalid_token_is_anonymous() {
        let (status, _) = call(app(auth()), "/me", Some(("authorization", "Bearer junk".to_string()))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
