use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::history::HistoryEntry;
use crate::models::order::{Order, OrderStatus};

pub mod order_store;

pub use order_store::InMemoryOrderStore;

/// Storage boundary for orders. The portal keeps everything in memory; a
/// backend would put a database behind this trait without touching the
/// service layer.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Find an order by ID.
    async fn get(&self, id: Uuid) -> Result<Option<Order>, ServiceError>;

    /// All orders, newest first.
    async fn list(&self) -> Result<Vec<Order>, ServiceError>;

    /// Orders in the given status, newest first.
    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, ServiceError>;

    /// Stores a new order. Fails if the ID is already taken.
    async fn insert(&self, order: Order) -> Result<(), ServiceError>;

    /// Replaces a stored order. Fails if the order does not exist.
    async fn update(&self, order: Order) -> Result<(), ServiceError>;

    /// Appends a history entry to a stored order.
    async fn append_history(&self, id: Uuid, entry: HistoryEntry) -> Result<(), ServiceError>;
}
