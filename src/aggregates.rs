//! Derived-value calculations over order line items.
//!
//! Pure arithmetic, no state: every screen calls these on demand against
//! whatever item list is in scope. Adjudicated lines contribute their
//! confirmed quantity, pending and preorder lines their requested quantity,
//! rejected lines nothing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::models::order_item::OrderItem;

/// Payload capacity of a standard delivery truck in kilograms.
pub const DEFAULT_TRUCK_CAPACITY_KG: Decimal = dec!(20000);

/// Projected shipment weight in kilograms.
pub fn total_weight(items: &[OrderItem]) -> Decimal {
    items.iter().map(OrderItem::line_weight).sum()
}

/// Projected order value.
pub fn total_amount(items: &[OrderItem]) -> Decimal {
    items.iter().map(OrderItem::line_amount).sum()
}

/// Value of all shortage quantities at their line prices.
pub fn shortage_amount(items: &[OrderItem]) -> Decimal {
    items
        .iter()
        .map(|item| Decimal::from(item.qty_shortage) * item.unit_price)
        .sum()
}

/// Weight utilization of a truck, clamped to 100 percent.
pub fn truck_load_percent(weight: Decimal, capacity: Decimal) -> Result<Decimal, ServiceError> {
    if capacity <= Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "Truck capacity must be positive".to_string(),
        ));
    }
    Ok((weight / capacity * dec!(100)).min(dec!(100)))
}

/// How a quantity splits into full pallets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalletBreakdown {
    pub full_pallets: i32,
    pub remainder: i32,
    pub is_exact: bool,
}

/// Splits a quantity into full pallets and a remainder.
pub fn pallet_breakdown(quantity: i32, pallet_qty: i32) -> Result<PalletBreakdown, ServiceError> {
    if pallet_qty <= 0 {
        return Err(ServiceError::ValidationError(
            "Pallet quantity must be positive".to_string(),
        ));
    }
    if quantity < 0 {
        return Err(ServiceError::ValidationError(
            "Quantity cannot be negative".to_string(),
        ));
    }
    let remainder = quantity % pallet_qty;
    Ok(PalletBreakdown {
        full_pallets: quantity / pallet_qty,
        remainder,
        is_exact: remainder == 0,
    })
}
