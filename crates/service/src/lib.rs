//! Service layer for service orders.
//! - `service_order` holds the order store: repository port plus business rules.
//! - `notification` is the completion-message collaborator.
//! - `export` renders orders as the spreadsheet-friendly CSV used by the front desk.

pub mod errors;
pub mod runtime;
pub mod db;
pub mod service_order;
pub mod notification;
pub mod export;
#[cfg(test)]
pub mod test_support;
