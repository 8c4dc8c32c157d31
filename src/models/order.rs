use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;
use validator::Validate;

use crate::aggregates;
use crate::errors::ServiceError;
use crate::models::history::HistoryEntry;
use crate::models::order_item::OrderItem;

/// Enum representing the possible statuses of an order.
///
/// Declaration order is the lifecycle sequence; orders only move forward
/// along it.
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
pub enum OrderStatus {
    Draft,
    Sent,
    Processing,
    NeedsApproval,
    Confirmed,
    Scheduled,
    Shipped,
}

impl OrderStatus {
    /// The fixed lifecycle sequence, in order.
    pub const SEQUENCE: [OrderStatus; 7] = [
        OrderStatus::Draft,
        OrderStatus::Sent,
        OrderStatus::Processing,
        OrderStatus::NeedsApproval,
        OrderStatus::Confirmed,
        OrderStatus::Scheduled,
        OrderStatus::Shipped,
    ];

    /// Position of this status in the lifecycle sequence (0-based).
    pub fn step_index(self) -> usize {
        match self {
            OrderStatus::Draft => 0,
            OrderStatus::Sent => 1,
            OrderStatus::Processing => 2,
            OrderStatus::NeedsApproval => 3,
            OrderStatus::Confirmed => 4,
            OrderStatus::Scheduled => 5,
            OrderStatus::Shipped => 6,
        }
    }

    /// Returns true once the order content is frozen for everyone.
    pub fn is_locked(self) -> bool {
        matches!(
            self,
            OrderStatus::Confirmed | OrderStatus::Scheduled | OrderStatus::Shipped
        )
    }

    /// Returns true while the client may still change line items.
    pub fn can_client_edit(self) -> bool {
        matches!(self, OrderStatus::Draft | OrderStatus::NeedsApproval)
    }

    /// Validates a status transition. Same-status updates are a no-op;
    /// anything backward is rejected.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        next.step_index() >= self.step_index()
    }
}

/// Enum representing the possible order types.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OrderType {
    Regular,
    Direct,
}

/// Contact details of the manager assigned to an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ManagerContact {
    #[validate(length(min = 1, message = "Manager name is required"))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(email(message = "Manager email must be valid"))]
    pub email: Option<String>,
}

/// A client purchase request tracked through the fixed multi-stage lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    pub id: Uuid,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Order number must be between 1 and 50 characters"
    ))]
    pub order_number: String,

    #[validate(length(min = 1, message = "Client name is required"))]
    pub client_name: String,

    pub order_type: OrderType,

    /// Current status of the order.
    pub status: OrderStatus,

    #[validate(length(min = 1, message = "Warehouse is required"))]
    pub warehouse: String,

    /// Manager assigned to handle the order.
    #[validate]
    pub manager: ManagerContact,

    /// Date the client wants the shipment to go out.
    pub desired_shipment_date: Option<NaiveDate>,

    /// Timestamp when the order was created (entered draft).
    pub created_at: DateTime<Utc>,

    /// Timestamp when the order was sent to the supplier.
    pub sent_at: Option<DateTime<Utc>>,

    /// Timestamp when the order was last updated.
    pub updated_at: Option<DateTime<Utc>>,

    /// Line items, in the order the client added them.
    #[validate]
    pub items: Vec<OrderItem>,

    /// Append-only history of what happened to the order.
    pub history: Vec<HistoryEntry>,
}

impl Order {
    /// Creates a new order in draft status with no items or history.
    pub fn new(
        order_number: String,
        client_name: String,
        order_type: OrderType,
        warehouse: String,
        manager: ManagerContact,
        desired_shipment_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_number,
            client_name,
            order_type,
            status: OrderStatus::Draft,
            warehouse,
            manager,
            desired_shipment_date,
            created_at: Utc::now(),
            sent_at: None,
            updated_at: None,
            items: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.status.is_locked()
    }

    pub fn can_client_edit(&self) -> bool {
        self.status.can_client_edit()
    }

    /// Moves the order forward along the lifecycle. Stamps `sent_at` when the
    /// order enters `Sent`.
    pub fn update_status(&mut self, new_status: OrderStatus) -> Result<(), ServiceError> {
        if !self.status.can_transition_to(new_status) {
            return Err(ServiceError::InvalidStatus(format!(
                "Cannot transition from status '{}' to '{}'",
                self.status, new_status
            )));
        }
        if new_status == OrderStatus::Sent && self.sent_at.is_none() {
            self.sent_at = Some(Utc::now());
        }
        self.status = new_status;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Appends a history entry. History is append-only; nothing removes
    /// entries.
    pub fn append_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    pub fn item(&self, item_id: Uuid) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: Uuid) -> Option<&mut OrderItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Projected shipment weight in kilograms.
    pub fn total_weight(&self) -> Decimal {
        aggregates::total_weight(&self.items)
    }

    /// Projected order value.
    pub fn total_amount(&self) -> Decimal {
        aggregates::total_amount(&self.items)
    }

    /// Value of everything the supplier could not confirm.
    pub fn shortage_amount(&self) -> Decimal {
        aggregates::shortage_amount(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    /// Helper function to create a valid draft order.
    fn create_valid_order() -> Order {
        Order::new(
            "ORD-2024-001".to_string(),
            "Horns & Hooves LLC".to_string(),
            OrderType::Regular,
            "Central warehouse".to_string(),
            ManagerContact {
                name: "Elena Petrova".to_string(),
                phone: Some("+7 900 123-45-67".to_string()),
                email: Some("e.petrova@example.com".to_string()),
            },
            None,
        )
    }

    #[test]
    fn new_order_starts_in_draft() {
        let order = create_valid_order();
        assert!(order.validate().is_ok());
        assert_eq!(order.status, OrderStatus::Draft);
        assert!(order.items.is_empty());
        assert!(order.history.is_empty());
        assert!(order.sent_at.is_none());
        assert!(order.created_at <= Utc::now());
    }

    // The lock and edit predicates are not complements: sent and processing
    // orders are neither editable nor locked. Enumerate all seven statuses.
    #[test_case(OrderStatus::Draft, false, true; "draft")]
    #[test_case(OrderStatus::Sent, false, false; "sent")]
    #[test_case(OrderStatus::Processing, false, false; "processing")]
    #[test_case(OrderStatus::NeedsApproval, false, true; "needs approval")]
    #[test_case(OrderStatus::Confirmed, true, false; "confirmed")]
    #[test_case(OrderStatus::Scheduled, true, false; "scheduled")]
    #[test_case(OrderStatus::Shipped, true, false; "shipped")]
    fn status_predicates(status: OrderStatus, locked: bool, editable: bool) {
        assert_eq!(status.is_locked(), locked);
        assert_eq!(status.can_client_edit(), editable);
    }

    #[test]
    fn step_index_matches_sequence() {
        for (index, status) in OrderStatus::SEQUENCE.iter().enumerate() {
            assert_eq!(status.step_index(), index);
        }
        assert_eq!(OrderStatus::iter().count(), OrderStatus::SEQUENCE.len());
    }

    #[test]
    fn forward_transitions_are_allowed() {
        let mut order = create_valid_order();
        for status in [
            OrderStatus::Sent,
            OrderStatus::Processing,
            OrderStatus::NeedsApproval,
            OrderStatus::Confirmed,
            OrderStatus::Scheduled,
            OrderStatus::Shipped,
        ] {
            order.update_status(status).expect("forward transition");
            assert_eq!(order.status, status);
        }
        assert!(order.updated_at.is_some());
    }

    #[test]
    fn backward_transition_is_rejected() {
        let mut order = create_valid_order();
        order.update_status(OrderStatus::Processing).unwrap();
        let result = order.update_status(OrderStatus::Sent);
        assert_matches!(result, Err(ServiceError::InvalidStatus(_)));
        assert_eq!(order.status, OrderStatus::Processing);
    }

    #[test]
    fn sent_at_is_stamped_once() {
        let mut order = create_valid_order();
        order.update_status(OrderStatus::Sent).unwrap();
        let first = order.sent_at.expect("sent_at stamped");
        order.update_status(OrderStatus::Sent).unwrap();
        assert_eq!(order.sent_at, Some(first));
    }

    #[test]
    fn statuses_serialize_to_portal_strings() {
        let encoded = serde_json::to_string(&OrderStatus::NeedsApproval).unwrap();
        assert_eq!(encoded, "\"needs-approval\"");
        let decoded: OrderStatus = serde_json::from_str("\"scheduled\"").unwrap();
        assert_eq!(decoded, OrderStatus::Scheduled);
        assert_eq!(OrderStatus::NeedsApproval.to_string(), "needs-approval");
    }

    #[test]
    fn unknown_status_string_fails_to_parse() {
        let parsed = "cancelled".parse::<OrderStatus>();
        assert!(parsed.is_err());
    }

    #[test]
    fn order_validation_rejects_bad_manager_email() {
        let mut order = create_valid_order();
        order.manager.email = Some("not-an-email".to_string());
        let validation = order.validate();
        assert!(validation.is_err());
    }
}
