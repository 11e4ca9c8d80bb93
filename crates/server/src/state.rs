use std::sync::Arc;

use service::notification::NotificationSender;
use service::service_order::{ServiceOrderRepository, ServiceOrderService};

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub orders: ServiceOrderService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ServiceOrderRepository>, notifier: Arc<dyn NotificationSender>) -> Self {
        Self { orders: ServiceOrderService::new(repo, notifier) }
    }
}
