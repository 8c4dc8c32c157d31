use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::{
    aggregates,
    config::PortalConfig,
    errors::ServiceError,
    events::{Event, EventSender},
    models::history::{HistoryEntry, HistoryKind},
    models::order::{ManagerContact, Order, OrderStatus, OrderType},
    models::order_item::{LineItemStatus, OrderItem},
    repositories::OrderStore,
};

/// Request/Response types for the order service
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Order number must be between 1 and 50 characters"
    ))]
    pub order_number: String,
    #[validate(length(min = 1, message = "Client name is required"))]
    pub client_name: String,
    pub order_type: OrderType,
    #[validate(length(min = 1, message = "Warehouse is required"))]
    pub warehouse: String,
    #[validate]
    pub manager: ManagerContact,
    pub desired_shipment_date: Option<NaiveDate>,
    #[validate]
    pub items: Vec<NewOrderItem>,
    #[validate(length(min = 1, message = "Actor is required"))]
    pub actor: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewOrderItem {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub product_name: String,
    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,
    #[validate(range(min = 1, message = "Requested quantity must be positive"))]
    pub qty_requested: i32,
    pub unit_price: Decimal,
    pub unit_weight: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AdjudicateItemRequest {
    pub status: LineItemStatus,
    #[validate(range(min = 0, message = "Confirmed quantity cannot be negative"))]
    pub qty_confirmed: i32,
    pub rejection_reason: Option<String>,
    #[validate(length(min = 1, message = "Actor is required"))]
    pub actor: String,
}

/// Aggregate snapshot for an order's summary panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub total_weight_kg: Decimal,
    pub total_amount: Decimal,
    pub shortage_amount: Decimal,
    pub truck_load_percent: Decimal,
}

/// Service for managing orders against the configured store.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    event_sender: Option<EventSender>,
    config: PortalConfig,
}

impl OrderService {
    /// Creates a new order service instance
    pub fn new(
        store: Arc<dyn OrderStore>,
        event_sender: Option<EventSender>,
        config: PortalConfig,
    ) -> Self {
        Self {
            store,
            event_sender,
            config,
        }
    }

    /// Creates a new order in draft status.
    #[instrument(skip(self, request), fields(order_number = %request.order_number))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, ServiceError> {
        request.validate()?;

        let mut order = Order::new(
            request.order_number,
            request.client_name,
            request.order_type,
            request.warehouse,
            request.manager,
            request.desired_shipment_date,
        );

        for item in request.items {
            let item = OrderItem::new(
                order.id,
                item.product_name,
                item.sku,
                item.qty_requested,
                item.unit_price,
                item.unit_weight,
            );
            item.validate()?;
            order.items.push(item);
        }

        order.append_history(HistoryEntry::new(
            HistoryKind::Created,
            "Order created",
            request.actor,
        ));

        self.store.insert(order.clone()).await?;
        self.publish(Event::OrderCreated(order.id)).await;

        info!(order_id = %order.id, items = order.items.len(), "Order created");
        Ok(order)
    }

    /// Sends a draft order to the supplier.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn submit_order(&self, order_id: Uuid, actor: &str) -> Result<Order, ServiceError> {
        let mut order = self.load(order_id).await?;

        if order.status != OrderStatus::Draft {
            error!(status = %order.status, "Only draft orders can be submitted");
            return Err(ServiceError::InvalidOperation(format!(
                "Order {} cannot be submitted from status '{}'",
                order_id, order.status
            )));
        }

        order.update_status(OrderStatus::Sent)?;
        order.append_history(HistoryEntry::new(
            HistoryKind::Submitted,
            "Order sent to supplier",
            actor,
        ));

        self.store.update(order.clone()).await?;
        self.publish(Event::OrderStatusChanged {
            order_id,
            old_status: OrderStatus::Draft,
            new_status: OrderStatus::Sent,
        })
        .await;

        info!("Order submitted");
        Ok(order)
    }

    /// Moves an order forward along the lifecycle. Same-status updates are a
    /// no-op.
    #[instrument(skip(self), fields(order_id = %order_id, new_status = %new_status))]
    pub async fn update_status(
        &self,
        order_id: Uuid,
        new_status: OrderStatus,
        actor: &str,
    ) -> Result<Order, ServiceError> {
        let mut order = self.load(order_id).await?;
        let old_status = order.status;

        if old_status == new_status {
            return Ok(order);
        }

        order.update_status(new_status).map_err(|e| {
            error!(old_status = %old_status, "Invalid status transition");
            e
        })?;
        order.append_history(HistoryEntry::new(
            HistoryKind::StatusChanged,
            format!("Status changed from '{}' to '{}'", old_status, new_status),
            actor,
        ));

        self.store.update(order.clone()).await?;
        self.publish(Event::OrderStatusChanged {
            order_id,
            old_status,
            new_status,
        })
        .await;

        info!(old_status = %old_status, "Order status updated");
        Ok(order)
    }

    /// Adds a line item while the client can still edit the order.
    #[instrument(skip(self, item), fields(order_id = %order_id, sku = %item.sku))]
    pub async fn add_item(
        &self,
        order_id: Uuid,
        item: NewOrderItem,
        actor: &str,
    ) -> Result<Order, ServiceError> {
        item.validate()?;

        let mut order = self.load(order_id).await?;
        if order.is_locked() {
            error!(status = %order.status, "Order is locked");
            return Err(ServiceError::OrderLocked(order_id));
        }
        if !order.can_client_edit() {
            error!(status = %order.status, "Order is not client-editable");
            return Err(ServiceError::InvalidOperation(format!(
                "Order {} cannot be edited in status '{}'",
                order_id, order.status
            )));
        }

        let item = OrderItem::new(
            order.id,
            item.product_name,
            item.sku,
            item.qty_requested,
            item.unit_price,
            item.unit_weight,
        );
        item.validate()?;
        let item_id = item.id;
        let description = format!("Added {} x {}", item.qty_requested, item.product_name);
        order.items.push(item);
        order.updated_at = Some(Utc::now());
        order.append_history(HistoryEntry::new(HistoryKind::ItemAdded, description, actor));

        self.store.update(order.clone()).await?;
        self.publish(Event::OrderItemAdded { order_id, item_id }).await;

        info!(item_id = %item_id, "Line item added");
        Ok(order)
    }

    /// Records the supplier's decision on a single line item. The requested
    /// quantity splits into confirmed and shortage; rejected lines confirm
    /// nothing.
    #[instrument(skip(self, request), fields(order_id = %order_id, item_id = %item_id, status = %request.status))]
    pub async fn adjudicate_item(
        &self,
        order_id: Uuid,
        item_id: Uuid,
        request: AdjudicateItemRequest,
    ) -> Result<Order, ServiceError> {
        request.validate()?;

        let mut order = self.load(order_id).await?;
        if order.is_locked() {
            error!(status = %order.status, "Order is locked");
            return Err(ServiceError::OrderLocked(order_id));
        }

        let item = order
            .item(item_id)
            .ok_or_else(|| ServiceError::item_not_found(order_id, item_id))?;

        let mut updated = item.clone();
        updated.status = request.status;
        if request.status.is_adjudicated() {
            updated.qty_confirmed = request.qty_confirmed;
            updated.qty_shortage = updated.qty_requested - request.qty_confirmed;
        } else {
            updated.qty_confirmed = 0;
            updated.qty_shortage = 0;
        }
        updated.rejection_reason = request.rejection_reason;
        updated.updated_at = Some(Utc::now());
        updated.validate()?;

        let description = format!("Line '{}' marked {}", updated.sku, updated.status);
        if let Some(slot) = order.item_mut(item_id) {
            *slot = updated;
        }
        order.updated_at = Some(Utc::now());
        order.append_history(HistoryEntry::new(
            HistoryKind::ItemAdjudicated,
            description,
            request.actor,
        ));

        self.store.update(order.clone()).await?;
        self.publish(Event::OrderItemAdjudicated {
            order_id,
            item_id,
            status: request.status,
        })
        .await;

        info!("Line item adjudicated");
        Ok(order)
    }

    /// Aggregate snapshot for the order summary panel.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn order_totals(&self, order_id: Uuid) -> Result<OrderTotals, ServiceError> {
        let order = self.load(order_id).await?;
        let total_weight_kg = aggregates::total_weight(&order.items);
        Ok(OrderTotals {
            total_weight_kg,
            total_amount: aggregates::total_amount(&order.items),
            shortage_amount: aggregates::shortage_amount(&order.items),
            truck_load_percent: aggregates::truck_load_percent(
                total_weight_kg,
                self.config.truck_capacity_kg,
            )?,
        })
    }

    /// Gets an order by ID.
    pub async fn get_order(&self, order_id: Uuid) -> Result<Order, ServiceError> {
        self.load(order_id).await
    }

    /// All orders, newest first.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        self.store.list().await
    }

    /// Orders in the given status, newest first.
    pub async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, ServiceError> {
        self.store.list_by_status(status).await
    }

    async fn load(&self, order_id: Uuid) -> Result<Order, ServiceError> {
        self.store
            .get(order_id)
            .await?
            .ok_or_else(|| ServiceError::order_not_found(order_id))
    }

    // Events carry notifications, not state; a full notification feed must
    // not block order mutations.
    async fn publish(&self, event: Event) {
        if let Some(sender) = &self.event_sender {
            if let Err(e) = sender.send(event).await {
                warn!(error = %e, "Failed to publish order event");
            }
        }
    }
}
