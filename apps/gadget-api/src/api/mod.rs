//! API routes
//!
//! Every mount point is a `const` checked at compile time, so a path
//! without its leading `/` fails the build instead of silently never
//! matching.

pub mod carts;
pub mod categories;
pub mod health;
pub mod products;
pub mod users;

use axum::{Router, middleware::from_fn_with_state};
use axum_helpers::{check_route_paths, identity_middleware, liveness_router};

use crate::state::AppState;

pub const PRODUCTS: &str = "/products";
pub const CATEGORIES: &str = "/categories";
pub const USERS: &str = "/users";
pub const USER: &str = "/user";
pub const CARTS: &str = "/carts";

const _: () = check_route_paths(&[PRODUCTS, CATEGORIES, USERS, USER, CARTS]);

/// Plain-text body of `GET /`
pub const LIVENESS_BANNER: &str = "Gadget24 is running";

/// Create all API routes, with caller identity decoded on every request
pub fn routes(state: &AppState) -> Router {
    let (users, admin_check) = users::routers(state);

    Router::new()
        .nest(PRODUCTS, products::router(state))
        .nest(CATEGORIES, categories::router(state))
        .nest(USERS, users)
        .nest(USER, admin_check)
        .nest(CARTS, carts::router(state))
        .merge(health::router(state.clone()))
        .merge(liveness_router(LIVENESS_BANNER))
        .layer(from_fn_with_state(state.jwt.clone(), identity_middleware))
}

/// Create indexes the routes rely on
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    products::init_indexes(db).await?;
    users::init_indexes(db).await?;
    carts::init_indexes(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    //! These requests are all answered before any store call, so the
    //! client below never has to reach a server.

    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum_helpers::JwtConfig;
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use domain_users::AdminConfig;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const SECRET: &str = "routes-test-secret-that-is-long-enough";
    const MONGO_URL: &str = "mongodb://127.0.0.1:27017";

    async fn state() -> AppState {
        let config = Config {
            app: app_info!(),
            mongodb: MongoConfig::new(MONGO_URL),
            server: ServerConfig::default(),
            jwt: JwtConfig::new(SECRET).unwrap(),
            admins: AdminConfig::default(),
            environment: Environment::Development,
        };
        let client = mongodb::Client::with_uri_str(MONGO_URL).await.unwrap();
        AppState::new(config, client)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_mount_points() {
        assert_eq!(
            [PRODUCTS, CATEGORIES, USERS, USER, CARTS],
            ["/products", "/categories", "/users", "/user", "/carts"]
        );
    }

    #[tokio::test]
    async fn test_liveness_banner() {
        let app = routes(&state().await);
        let (status, body) = send(app, get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, LIVENESS_BANNER.as_bytes());
    }

    #[tokio::test]
    async fn test_cart_listing_is_mounted_and_requires_email() {
        let app = routes(&state().await);
        let (status, body) = send(app, get("/carts")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], json!("email query parameter is required"));
    }

    #[tokio::test]
    async fn test_admin_check_without_token_is_unauthorized() {
        let app = routes(&state().await);
        let (status, _) = send(app, get("/user/admin/a@x.com")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_identity_layer_decodes_tokens() {
        let state = state().await;
        let token = state.jwt.issue("subject", "a@x.com").unwrap();
        let app = routes(&state);

        let request = Request::builder()
            .uri("/user/admin/boss@x.com")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], json!("unauthorized access"));
    }

    #[tokio::test]
    async fn test_malformed_product_id_is_rejected() {
        let app = routes(&state().await);
        let (status, body) = send(app, get("/products/not-an-id")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], json!("INVALID_OBJECT_ID"));
    }
}
