//! Compile-time checks for route tables.

/// Panics unless every path starts with `/`.
///
/// Intended for `const` contexts so a malformed path fails the build:
///
/// ```
/// use axum_helpers::server::routes::check_route_paths;
///
/// const PRODUCTS: &str = "/products";
/// const _: () = check_route_paths(&[PRODUCTS]);
/// ```
pub const fn check_route_paths(paths: &[&str]) {
    let mut i = 0;
    while i < paths.len() {
        let bytes = paths[i].as_bytes();
        if bytes.is_empty() || bytes[0] != b'/' {
            panic!("route paths must start with '/'");
        }
        i += 1;
    }
}
