use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use models::service_order::{NewServiceOrder, ServiceOrder};

use crate::errors::ServiceError;

/// Persistence port for service orders. Implementations own id assignment.
#[async_trait]
pub trait ServiceOrderRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ServiceOrder>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<ServiceOrder>, ServiceError>;
    async fn create(&self, input: NewServiceOrder) -> Result<ServiceOrder, ServiceError>;
    /// Persist the mutable fields of an existing order; `NotFound` if it is gone.
    async fn update(&self, order: ServiceOrder) -> Result<ServiceOrder, ServiceError>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServiceOrderRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ServiceOrderRepository for SeaOrmServiceOrderRepository {
    async fn list(&self) -> Result<Vec<ServiceOrder>, ServiceError> {
        crate::db::service_order_service::list_service_orders(&self.db).await
    }

    async fn get(&self, id: i64) -> Result<Option<ServiceOrder>, ServiceError> {
        crate::db::service_order_service::get_service_order(&self.db, id).await
    }

    async fn create(&self, input: NewServiceOrder) -> Result<ServiceOrder, ServiceError> {
        crate::db::service_order_service::create_service_order(&self.db, input).await
    }

    async fn update(&self, order: ServiceOrder) -> Result<ServiceOrder, ServiceError> {
        crate::db::service_order_service::update_service_order(&self.db, order).await
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        crate::db::service_order_service::delete_service_order(&self.db, id).await
    }
}

/// In-memory repository for tests and for running the HTTP layer without a database
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Inner {
        next_id: i64,
        orders: BTreeMap<i64, ServiceOrder>,
    }

    /// Ids start at 1 and are never reused, even after a delete.
    #[derive(Default)]
    pub struct InMemoryServiceOrderRepository {
        inner: Mutex<Inner>,
    }

    #[async_trait]
    impl ServiceOrderRepository for InMemoryServiceOrderRepository {
        async fn list(&self) -> Result<Vec<ServiceOrder>, ServiceError> {
            let inner = self.inner.lock().await;
            Ok(inner.orders.values().cloned().collect())
        }

        async fn get(&self, id: i64) -> Result<Option<ServiceOrder>, ServiceError> {
            let inner = self.inner.lock().await;
            Ok(inner.orders.get(&id).cloned())
        }

        async fn create(&self, input: NewServiceOrder) -> Result<ServiceOrder, ServiceError> {
            let mut inner = self.inner.lock().await;
            inner.next_id += 1;
            let order = input.into_order(inner.next_id);
            inner.orders.insert(order.id, order.clone());
            Ok(order)
        }

        async fn update(&self, order: ServiceOrder) -> Result<ServiceOrder, ServiceError> {
            let mut inner = self.inner.lock().await;
            let stored = inner
                .orders
                .get_mut(&order.id)
                .ok_or_else(|| ServiceError::not_found("service order"))?;
            stored.status = order.status;
            stored.payment_method = order.payment_method;
            stored.message_was_sent = order.message_was_sent;
            Ok(stored.clone())
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            let mut inner = self.inner.lock().await;
            Ok(inner.orders.remove(&id).is_some())
        }
    }

}
