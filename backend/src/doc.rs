//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (users, orders,
//!   health)
//! - **Schemas**: response DTOs plus domain type wrappers ([`ErrorSchema`],
//!   [`ErrorCodeSchema`]) that provide OpenAPI definitions without coupling
//!   domain types to the utoipa framework
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::orders::{
    OrderResponse, PurchaseOrderResponse, PurchaseProductResponse, PurchaseResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UsersDataUploadSchema};
use crate::inbound::http::users::{UploadResponse, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Purchases backend API",
        description = "Fixed-width purchase file ingestion and order/purchase queries."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::upload_users_data,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserResponse,
        UploadResponse,
        OrderResponse,
        PurchaseResponse,
        PurchaseOrderResponse,
        PurchaseProductResponse,
        UsersDataUploadSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User lookup and purchase file upload"),
        (name = "orders", description = "Orders and purchase aggregations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure and path registration.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn openapi_purchase_schema_nests_orders() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let purchase = schemas.get("PurchaseResponse").expect("purchase schema");

        assert_object_schema_has_field(purchase, "user_id");
        assert_object_schema_has_field(purchase, "orders");
    }

    #[rstest]
    #[case("/user/{id}")]
    #[case("/user/upload")]
    #[case("/order/{id}")]
    #[case("/orders")]
    #[case("/health")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_registers_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}
