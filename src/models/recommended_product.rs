use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::aggregates::{self, PalletBreakdown};
use crate::errors::ServiceError;

/// Stock availability classification shown on catalog suggestions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Availability {
    Plenty,
    InStock,
}

/// Catalog suggestion used to populate the "add filler items" screen.
/// Independent of any order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendedProduct {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub unit_price: Decimal,
    /// Weight per unit in kilograms.
    pub unit_weight: Decimal,
    /// Units per full pallet.
    pub pallet_qty: i32,
    pub availability: Availability,
    /// True when this client has bought the product before.
    pub previously_purchased: bool,
}

impl RecommendedProduct {
    /// Splits a suggested quantity into full pallets and remainder.
    pub fn pallet_fill(&self, quantity: i32) -> Result<PalletBreakdown, ServiceError> {
        aggregates::pallet_breakdown(quantity, self.pallet_qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn suggestion(pallet_qty: i32) -> RecommendedProduct {
        RecommendedProduct {
            id: Uuid::new_v4(),
            name: "Rye flour".to_string(),
            sku: "FLR-RYE-02".to_string(),
            unit_price: dec!(980),
            unit_weight: dec!(2.0),
            pallet_qty,
            availability: Availability::Plenty,
            previously_purchased: true,
        }
    }

    #[test]
    fn pallet_fill_splits_quantity() {
        let breakdown = suggestion(48).pallet_fill(120).unwrap();
        assert_eq!(breakdown.full_pallets, 2);
        assert_eq!(breakdown.remainder, 24);
        assert!(!breakdown.is_exact);
    }

    #[test]
    fn zero_pallet_qty_is_rejected() {
        assert!(suggestion(0).pallet_fill(120).is_err());
    }
}
