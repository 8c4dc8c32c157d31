use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the order domain and its services.
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Order {0} is locked")]
    OrderLocked(Uuid),

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ServiceError {
    pub fn order_not_found(id: Uuid) -> Self {
        ServiceError::NotFound(format!("Order {} not found", id))
    }

    pub fn item_not_found(order_id: Uuid, item_id: Uuid) -> Self {
        ServiceError::NotFound(format!(
            "Line item {} not found on order {}",
            item_id, order_id
        ))
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(errors.to_string())
    }
}
