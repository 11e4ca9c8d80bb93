use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use models::service_order::{NewServiceOrder, PaymentMethod, ServiceOrder, ServiceStatus};
use serde::Deserialize;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// PENDING, IN_PROGRESS, COMPLETED or CANCELLED
    #[param(value_type = String)]
    pub status: ServiceStatus,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaymentQuery {
    /// CASH, CARD or PIX
    #[param(value_type = String)]
    pub payment_method: PaymentMethod,
}

#[utoipa::path(
    get, path = "/service-orders", tag = "service-orders",
    responses(
        (status = 200, description = "All service orders", body = [crate::openapi::ServiceOrderDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ServiceOrder>>, JsonApiError> {
    let orders = state.orders.list().await?;
    info!(count = orders.len(), "list service orders");
    Ok(Json(orders))
}

#[utoipa::path(
    post, path = "/service-orders", tag = "service-orders",
    request_body = crate::openapi::CreateServiceOrderDoc,
    responses(
        (status = 200, description = "Created, always PENDING", body = crate::openapi::ServiceOrderDoc),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewServiceOrder>,
) -> Result<Json<ServiceOrder>, JsonApiError> {
    info!(client = %input.client_name, car_model = %input.car_model, service_type = %input.service_type, "service_order_create_request");
    Ok(Json(state.orders.create(input).await?))
}

#[utoipa::path(
    delete, path = "/service-orders/{id}", tag = "service-orders",
    params(("id" = i64, Path, description = "Service order ID")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.orders.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    put, path = "/service-orders/{id}/status", tag = "service-orders",
    params(("id" = i64, Path, description = "Service order ID"), StatusQuery),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceOrderDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(q): Query<StatusQuery>,
) -> Result<Json<ServiceOrder>, JsonApiError> {
    Ok(Json(state.orders.update_status(id, q.status).await?))
}

#[utoipa::path(
    put, path = "/service-orders/{id}/payment", tag = "service-orders",
    params(("id" = i64, Path, description = "Service order ID"), PaymentQuery),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceOrderDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_payment(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(q): Query<PaymentQuery>,
) -> Result<Json<ServiceOrder>, JsonApiError> {
    Ok(Json(state.orders.update_payment(id, q.payment_method).await?))
}

#[utoipa::path(
    get, path = "/service-orders/export", tag = "service-orders",
    responses(
        (status = 200, description = "CSV attachment", body = String, content_type = "text/csv"),
        (status = 500, description = "Export Failed")
    )
)]
pub async fn export(State(state): State<ServerState>) -> Result<Response, JsonApiError> {
    let bytes = state.orders.export_csv().await?;
    let filename = service::export::export_filename(&chrono::Local::now());
    info!(%filename, size = bytes.len(), "service orders exported");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
        ],
        bytes,
    )
        .into_response())
}
