//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Storefront API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Catalogue, site settings and admin provisioning for the memorial urn storefront"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    nest(
        (path = "/users", api = domain_users::ApiDoc),
        (path = "/products", api = domain_products::ApiDoc),
        (path = "/settings", api = domain_settings::ApiDoc)
    ),
    components(schemas(axum_helpers::ErrorResponse, axum_helpers::ErrorCode))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths_are_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in ["/users/admin", "/products", "/products/{id}", "/settings"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
