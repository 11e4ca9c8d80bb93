use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use models::service_order::{self, NewServiceOrder, ServiceOrder};
use tracing::debug;

use crate::errors::ServiceError;

/// List every order, oldest first.
pub async fn list_service_orders(db: &DatabaseConnection) -> Result<Vec<ServiceOrder>, ServiceError> {
    let rows = service_order::Entity::find()
        .order_by_asc(service_order::Column::Id)
        .all(db)
        .await?;
    debug!(count = rows.len(), "fetched service orders");
    Ok(rows)
}

/// Get order by id.
pub async fn get_service_order(db: &DatabaseConnection, id: i64) -> Result<Option<ServiceOrder>, ServiceError> {
    Ok(service_order::Entity::find_by_id(id).one(db).await?)
}

/// Insert a new order with creation defaults.
pub async fn create_service_order(db: &DatabaseConnection, input: NewServiceOrder) -> Result<ServiceOrder, ServiceError> {
    Ok(service_order::create(db, input).await?)
}

/// Persist status, payment method and message flag of an existing order.
pub async fn update_service_order(db: &DatabaseConnection, order: ServiceOrder) -> Result<ServiceOrder, ServiceError> {
    Ok(service_order::save(db, order).await?)
}

/// Delete order; returns whether a row was removed.
pub async fn delete_service_order(db: &DatabaseConnection, id: i64) -> Result<bool, ServiceError> {
    let res = service_order::Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
