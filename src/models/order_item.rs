use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Enum representing the possible statuses of a single line item.
///
/// Each line is adjudicated independently of the rest of the order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LineItemStatus {
    Confirmed,
    Pending,
    RejectedAuto,
    RejectedManager,
    Preorder,
    Backorder,
}

impl LineItemStatus {
    /// Returns true once the supplier has decided the line. Adjudicated lines
    /// count their confirmed quantity toward projections; the rest still
    /// count their requested quantity.
    pub fn is_adjudicated(self) -> bool {
        matches!(
            self,
            LineItemStatus::Confirmed
                | LineItemStatus::RejectedAuto
                | LineItemStatus::RejectedManager
                | LineItemStatus::Backorder
        )
    }

    pub fn is_rejected(self) -> bool {
        matches!(
            self,
            LineItemStatus::RejectedAuto | LineItemStatus::RejectedManager
        )
    }
}

/// One product entry within an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_quantities", skip_on_field_errors = true))]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,

    #[validate(length(min = 1, message = "Product name is required"))]
    pub product_name: String,

    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,

    /// Quantity the client asked for.
    #[validate(range(min = 1, message = "Requested quantity must be positive"))]
    pub qty_requested: i32,

    /// Quantity the supplier confirmed. Zero until the line is adjudicated.
    #[validate(range(min = 0, message = "Confirmed quantity cannot be negative"))]
    pub qty_confirmed: i32,

    /// Quantity the supplier could not cover.
    #[validate(range(min = 0, message = "Shortage quantity cannot be negative"))]
    pub qty_shortage: i32,

    /// Price per unit.
    pub unit_price: Decimal,

    /// Weight per unit in kilograms.
    pub unit_weight: Decimal,

    pub status: LineItemStatus,

    /// Free-text reason shown to the client when the line was rejected.
    pub rejection_reason: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrderItem {
    /// Creates a pending line item awaiting adjudication.
    pub fn new(
        order_id: Uuid,
        product_name: String,
        sku: String,
        qty_requested: i32,
        unit_price: Decimal,
        unit_weight: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_name,
            sku,
            qty_requested,
            qty_confirmed: 0,
            qty_shortage: 0,
            unit_price,
            unit_weight,
            status: LineItemStatus::Pending,
            rejection_reason: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Quantity this line contributes to weight and amount projections:
    /// the confirmed quantity once adjudicated, the requested quantity while
    /// the line is still pending or a preorder.
    pub fn effective_qty(&self) -> i32 {
        if self.status.is_adjudicated() {
            self.qty_confirmed
        } else {
            self.qty_requested
        }
    }

    /// Projected value of the line.
    pub fn line_amount(&self) -> Decimal {
        Decimal::from(self.effective_qty()) * self.unit_price
    }

    /// Projected weight of the line in kilograms.
    pub fn line_weight(&self) -> Decimal {
        Decimal::from(self.effective_qty()) * self.unit_weight
    }
}

fn validate_quantities(item: &OrderItem) -> Result<(), ValidationError> {
    if item.qty_confirmed > item.qty_requested {
        return Err(ValidationError::new("confirmed_exceeds_requested"));
    }
    if item.status.is_rejected() && item.qty_confirmed != 0 {
        return Err(ValidationError::new("rejected_line_with_confirmed_qty"));
    }
    // Adjudicated lines split the requested quantity between confirmed and
    // shortage. Rejected-auto lines are exempt; their shortage bookkeeping
    // follows the rejection, not the split.
    if item.status.is_adjudicated()
        && item.status != LineItemStatus::RejectedAuto
        && item.qty_requested != item.qty_confirmed + item.qty_shortage
    {
        return Err(ValidationError::new("quantity_split_mismatch"));
    }
    Ok(())
}
