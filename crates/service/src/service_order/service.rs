use std::sync::Arc;
use tracing::{info, instrument};

use models::service_order::{NewServiceOrder, PaymentMethod, ServiceOrder, ServiceStatus};

use crate::errors::ServiceError;
use crate::export;
use crate::notification::NotificationSender;
use crate::service_order::repository::ServiceOrderRepository;

/// Application service encapsulating service order business rules.
///
/// Creation always starts an order as `PENDING` with no payment and no message sent.
/// Status changes are unrestricted; reaching `COMPLETED` for the first time
/// triggers the completion notification exactly once per order.
#[derive(Clone)]
pub struct ServiceOrderService {
    repo: Arc<dyn ServiceOrderRepository>,
    notifier: Arc<dyn NotificationSender>,
}

impl ServiceOrderService {
    pub fn new(repo: Arc<dyn ServiceOrderRepository>, notifier: Arc<dyn NotificationSender>) -> Self {
        Self { repo, notifier }
    }

    pub async fn list(&self) -> Result<Vec<ServiceOrder>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<ServiceOrder>, ServiceError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self, input), fields(client = %input.client_name))]
    pub async fn create(&self, input: NewServiceOrder) -> Result<ServiceOrder, ServiceError> {
        let order = self.repo.create(input).await?;
        info!(id = order.id, "service_order_created");
        Ok(order)
    }

    /// Missing ids are a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let removed = self.repo.delete(id).await?;
        info!(id, removed, "service_order_delete");
        Ok(())
    }

    #[instrument(skip(self, status), fields(status = status.as_str()))]
    pub async fn update_status(&self, id: i64, status: ServiceStatus) -> Result<ServiceOrder, ServiceError> {
        let mut order = self.find_existing(id).await?;
        let previous = order.status;
        order.status = status;

        let first_completion = status == ServiceStatus::Completed && !order.message_was_sent;
        if first_completion {
            order.message_was_sent = true;
        }

        // flag is stored before the message goes out
        let saved = self.repo.update(order).await?;
        if first_completion {
            self.notifier.notify_completion(&saved).await;
        }
        info!(id, from = previous.as_str(), notified = first_completion, "service_order_status_updated");
        Ok(saved)
    }

    #[instrument(skip(self, payment_method), fields(payment_method = payment_method.as_str()))]
    pub async fn update_payment(&self, id: i64, payment_method: PaymentMethod) -> Result<ServiceOrder, ServiceError> {
        let mut order = self.find_existing(id).await?;
        order.payment_method = Some(payment_method);
        let saved = self.repo.update(order).await?;
        info!(id, "service_order_payment_updated");
        Ok(saved)
    }

    /// Render every order as CSV, see [`export::orders_to_csv`].
    pub async fn export_csv(&self) -> Result<Vec<u8>, ServiceError> {
        let orders = self.repo.list().await?;
        export::orders_to_csv(&orders)
    }

    async fn find_existing(&self, id: i64) -> Result<ServiceOrder, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("service order"))
    }
}
