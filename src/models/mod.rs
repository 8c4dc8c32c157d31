// Core models
pub mod history;
pub mod order;
pub mod order_item;
pub mod recommended_product;

pub use history::{HistoryEntry, HistoryKind};
pub use order::{ManagerContact, Order, OrderStatus, OrderType};
pub use order_item::{LineItemStatus, OrderItem};
pub use recommended_product::{Availability, RecommendedProduct};
