//! Partner Orders Library
//!
//! Domain core of a B2B partner portal's order management: the fixed order
//! lifecycle, per-line-item adjudication statuses, and the derived aggregate
//! calculations (totals, shortage, truck load, pallet rounding) behind the
//! portal's order screens.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod aggregates;
pub mod config;
pub mod display;
pub mod errors;
pub mod events;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;

pub mod prelude {
    pub use crate::aggregates::{
        pallet_breakdown, shortage_amount, total_amount, total_weight, truck_load_percent,
        PalletBreakdown, DEFAULT_TRUCK_CAPACITY_KG,
    };
    pub use crate::config::PortalConfig;
    pub use crate::errors::ServiceError;
    pub use crate::events::{Event, EventSender};
    pub use crate::models::history::{HistoryEntry, HistoryKind};
    pub use crate::models::order::{ManagerContact, Order, OrderStatus, OrderType};
    pub use crate::models::order_item::{LineItemStatus, OrderItem};
    pub use crate::models::recommended_product::{Availability, RecommendedProduct};
    pub use crate::repositories::{InMemoryOrderStore, OrderStore};
    pub use crate::services::orders::{
        AdjudicateItemRequest, CreateOrderRequest, NewOrderItem, OrderService, OrderTotals,
    };
}
