//! OpenAPI documentation configuration

use utoipa::{
    Modify, OpenApi,
    openapi::{
        Components,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gadget24 API",
        version = "0.1.0",
        description = "Products, categories, users and carts for the Gadget24 storefront",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc),
        (path = "/categories", api = domain_categories::ApiDoc),
        (path = "/users", api = domain_users::ApiDoc),
        (path = "/user", api = domain_users::AdminCheckApiDoc),
        (path = "/carts", api = domain_carts::ApiDoc)
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Products", description = "Product catalogue with pagination and brand filter"),
        (name = "Categories", description = "Product categories"),
        (name = "Users", description = "User accounts and roles"),
        (name = "Carts", description = "Cart items per customer email")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by the user operations
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::new);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
