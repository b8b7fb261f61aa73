//! Caller identity.
//!
//! Identity tokens are HS256 JWTs carrying the caller's email. The
//! [`identity_middleware`] decodes them for every request; handlers that need
//! a caller take [`Identity`] as an extractor.
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, identity_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//! let app = router.layer(axum::middleware::from_fn_with_state(auth, identity_middleware));
//! ```

pub mod config;
pub mod identity;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use identity::Identity;
pub use jwt::{IdentityClaims, JwtAuth};
pub use middleware::identity_middleware;
