//! Service order store: repository port (`repository`) and business rules (`service`).

pub mod repository;
pub mod service;

pub use repository::ServiceOrderRepository;
pub use service::ServiceOrderService;
