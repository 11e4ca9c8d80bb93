use sea_orm::{entity::prelude::*, ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Lifecycle stage of an order. Any stage may move to any other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "PENDING",
            ServiceStatus::InProgress => "IN_PROGRESS",
            ServiceStatus::Completed => "COMPLETED",
            ServiceStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "CASH")]
    Cash,
    #[sea_orm(string_value = "CARD")]
    Card,
    #[sea_orm(string_value = "PIX")]
    Pix,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Pix => "PIX",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_orders")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub client_name: String,
    pub phone_number: String,
    pub car_model: String,
    pub service_type: String,
    #[sea_orm(column_type = "Double")]
    pub service_value: f64,
    pub status: ServiceStatus,
    pub payment_method: Option<PaymentMethod>,
    pub message_was_sent: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A persisted service order.
pub type ServiceOrder = Model;

/// Caller-supplied fields for a new order. Status, payment and the message flag
/// are never taken from the caller; extra JSON fields are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceOrder {
    pub client_name: String,
    pub phone_number: String,
    pub car_model: String,
    pub service_type: String,
    pub service_value: f64,
}

impl NewServiceOrder {
    /// Build the stored record for `id` with the creation defaults applied.
    pub fn into_order(self, id: i64) -> Model {
        Model {
            id,
            client_name: self.client_name,
            phone_number: self.phone_number,
            car_model: self.car_model,
            service_type: self.service_type,
            service_value: self.service_value,
            status: ServiceStatus::Pending,
            payment_method: None,
            message_was_sent: false,
        }
    }
}

/// Insert a new order; the id comes from the table's sequence.
pub async fn create(db: &DatabaseConnection, input: NewServiceOrder) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        client_name: Set(input.client_name),
        phone_number: Set(input.phone_number),
        car_model: Set(input.car_model),
        service_type: Set(input.service_type),
        service_value: Set(input.service_value),
        status: Set(ServiceStatus::Pending),
        payment_method: Set(None),
        message_was_sent: Set(false),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite the mutable columns (status, payment method, message flag) of an existing order.
pub async fn save(db: &DatabaseConnection, order: Model) -> Result<Model, errors::ModelError> {
    let id = order.id;
    let am = ActiveModel {
        id: Unchanged(id),
        client_name: Unchanged(order.client_name),
        phone_number: Unchanged(order.phone_number),
        car_model: Unchanged(order.car_model),
        service_type: Unchanged(order.service_type),
        service_value: Unchanged(order.service_value),
        status: Set(order.status),
        payment_method: Set(order.payment_method),
        message_was_sent: Set(order.message_was_sent),
    };
    am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => errors::ModelError::NotFound(id),
        other => other.into(),
    })
}
