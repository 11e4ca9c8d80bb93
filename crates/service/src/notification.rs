//! Completion notification collaborator.
//!
//! The order store calls [`NotificationSender::notify_completion`] once per order, the
//! first time it reaches `COMPLETED`. Delivery is fire-and-forget: senders report
//! their own failures through logging and the store never waits on an outcome.

use async_trait::async_trait;
use models::service_order::ServiceOrder;
use tracing::info;

#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn notify_completion(&self, order: &ServiceOrder);
}

/// Default sender: records the message that would go to the client.
#[derive(Debug, Default, Clone)]
pub struct LoggingNotificationSender;

#[async_trait]
impl NotificationSender for LoggingNotificationSender {
    async fn notify_completion(&self, order: &ServiceOrder) {
        info!(
            order_id = order.id,
            client = %order.client_name,
            phone = %order.phone_number,
            car_model = %order.car_model,
            "service_order_completion_notice"
        );
    }
}

/// Recording sender for tests
pub mod mock {
    use super::*;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingNotificationSender {
        sent: Mutex<Vec<i64>>,
    }

    impl RecordingNotificationSender {
        /// Ids of the orders notified so far, in call order.
        pub async fn sent(&self) -> Vec<i64> {
            self.sent.lock().await.clone()
        }
    }

    #[async_trait]
    impl NotificationSender for RecordingNotificationSender {
        async fn notify_completion(&self, order: &ServiceOrder) {
            self.sent.lock().await.push(order.id);
        }
    }
}
