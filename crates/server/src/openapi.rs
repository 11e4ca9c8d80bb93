use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Body of `POST /service-orders`; status and message flag are always server-assigned.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateServiceOrderDoc {
    pub client_name: String,
    pub phone_number: String,
    pub car_model: String,
    pub service_type: String,
    pub service_value: f64,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServiceOrderDoc {
    pub id: i64,
    pub client_name: String,
    pub phone_number: String,
    pub car_model: String,
    pub service_type: String,
    pub service_value: f64,
    /// PENDING, IN_PROGRESS, COMPLETED or CANCELLED
    pub status: String,
    /// CASH, CARD or PIX; null until set
    pub payment_method: Option<String>,
    pub message_was_sent: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::service_orders::list,
        crate::routes::service_orders::create,
        crate::routes::service_orders::delete,
        crate::routes::service_orders::update_status,
        crate::routes::service_orders::update_payment,
        crate::routes::service_orders::export,
    ),
    components(
        schemas(
            HealthResponse,
            CreateServiceOrderDoc,
            ServiceOrderDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "service-orders")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use models::service_order::NewServiceOrder;
    use utoipa::openapi::{RefOr, Schema};

    fn schema_fields(name: &str) -> BTreeSet<String> {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            other => panic!("unexpected schema for {name}: {other:?}"),
        }
    }

    fn json_fields(v: serde_json::Value) -> BTreeSet<String> {
        v.as_object().expect("object").keys().cloned().collect()
    }

    fn new_order() -> NewServiceOrder {
        NewServiceOrder {
            client_name: "Ana".into(),
            phone_number: "555".into(),
            car_model: "Civic".into(),
            service_type: "oil change".into(),
            service_value: 49.9,
        }
    }

    #[test]
    fn order_schema_matches_serialized_model() {
        let order = new_order().into_order(1);
        assert_eq!(schema_fields("ServiceOrderDoc"), json_fields(serde_json::to_value(&order).unwrap()));
    }

    #[test]
    fn create_schema_matches_request_body() {
        assert_eq!(schema_fields("CreateServiceOrderDoc"), json_fields(serde_json::to_value(new_order()).unwrap()));
    }

    #[test]
    fn document_lists_order_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in [
            "/health",
            "/service-orders",
            "/service-orders/{id}",
            "/service-orders/{id}/status",
            "/service-orders/{id}/payment",
            "/service-orders/export",
        ] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
