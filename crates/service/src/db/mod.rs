//! SeaORM data-access functions used by the repository implementations.
pub mod service_order_service;
