use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::order::OrderStatus;
use crate::models::order_item::LineItemStatus;

// Define the various events that can occur around an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    OrderCreated(Uuid),
    OrderStatusChanged {
        order_id: Uuid,
        old_status: OrderStatus,
        new_status: OrderStatus,
    },
    OrderItemAdded {
        order_id: Uuid,
        item_id: Uuid,
    },
    OrderItemAdjudicated {
        order_id: Uuid,
        item_id: Uuid,
        status: LineItemStatus,
    },

    /// Generic event data
    Generic {
        message: String,
        timestamp: DateTime<Utc>,
        metadata: serde_json::Value,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Creates a bounded channel and the sender half wrapped for services.
    /// The portal's notification feed consumes the receiver.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), ServiceError> {
        self.sender
            .send(event)
            .await
            .map_err(|e| ServiceError::EventError(format!("Failed to send event: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_are_delivered_in_order() {
        let (sender, mut receiver) = EventSender::channel(8);
        let order_id = Uuid::new_v4();

        sender.send(Event::OrderCreated(order_id)).await.unwrap();
        sender
            .send(Event::OrderStatusChanged {
                order_id,
                old_status: OrderStatus::Draft,
                new_status: OrderStatus::Sent,
            })
            .await
            .unwrap();

        match receiver.recv().await {
            Some(Event::OrderCreated(id)) => assert_eq!(id, order_id),
            other => panic!("unexpected event: {:?}", other),
        }
        match receiver.recv().await {
            Some(Event::OrderStatusChanged { new_status, .. }) => {
                assert_eq!(new_status, OrderStatus::Sent)
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_fails_once_receiver_is_dropped() {
        let (sender, receiver) = EventSender::channel(1);
        drop(receiver);
        let result = sender.send(Event::OrderCreated(Uuid::new_v4())).await;
        assert!(matches!(result, Err(ServiceError::EventError(_))));
    }
}
