use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::history::HistoryEntry;
use crate::models::order::{Order, OrderStatus};
use crate::repositories::OrderStore;

/// In-memory order store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: DashMap<Uuid, Order>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get(&self, id: Uuid) -> Result<Option<Order>, ServiceError> {
        Ok(self.orders.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        let orders = self
            .orders
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        Ok(newest_first(orders))
    }

    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, ServiceError> {
        let orders = self
            .orders
            .iter()
            .filter(|entry| entry.value().status == status)
            .map(|entry| entry.value().clone())
            .collect();
        Ok(newest_first(orders))
    }

    async fn insert(&self, order: Order) -> Result<(), ServiceError> {
        if self.orders.contains_key(&order.id) {
            return Err(ServiceError::InvalidOperation(format!(
                "Order {} already exists",
                order.id
            )));
        }
        self.orders.insert(order.id, order);
        Ok(())
    }

    async fn update(&self, order: Order) -> Result<(), ServiceError> {
        match self.orders.get_mut(&order.id) {
            Some(mut entry) => {
                *entry = order;
                Ok(())
            }
            None => Err(ServiceError::order_not_found(order.id)),
        }
    }

    async fn append_history(&self, id: Uuid, entry: HistoryEntry) -> Result<(), ServiceError> {
        match self.orders.get_mut(&id) {
            Some(mut order) => {
                order.append_history(entry);
                Ok(())
            }
            None => Err(ServiceError::order_not_found(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::history::HistoryKind;
    use crate::models::order::{ManagerContact, OrderType};
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    fn sample_order(order_number: &str) -> Order {
        Order::new(
            order_number.to_string(),
            "Client".to_string(),
            OrderType::Regular,
            "North warehouse".to_string(),
            ManagerContact {
                name: "Manager".to_string(),
                phone: None,
                email: None,
            },
            None,
        )
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = InMemoryOrderStore::new();
        let order = sample_order("ORD-1");
        let id = order.id;

        store.insert(order.clone()).await.unwrap();
        let fetched = store.get(id).await.unwrap().expect("order stored");
        assert_eq!(fetched, order);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = InMemoryOrderStore::new();
        let order = sample_order("ORD-1");
        store.insert(order.clone()).await.unwrap();
        let result = store.insert(order).await;
        assert_matches!(result, Err(ServiceError::InvalidOperation(_)));
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = InMemoryOrderStore::new();
        let mut older = sample_order("ORD-OLD");
        older.created_at = Utc::now() - Duration::hours(2);
        let newer = sample_order("ORD-NEW");

        store.insert(older).await.unwrap();
        store.insert(newer).await.unwrap();

        let orders = store.list().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_number, "ORD-NEW");
        assert_eq!(orders[1].order_number, "ORD-OLD");
    }

    #[tokio::test]
    async fn list_by_status_filters() {
        let store = InMemoryOrderStore::new();
        let draft = sample_order("ORD-DRAFT");
        let mut sent = sample_order("ORD-SENT");
        sent.update_status(OrderStatus::Sent).unwrap();

        store.insert(draft).await.unwrap();
        store.insert(sent).await.unwrap();

        let drafts = store.list_by_status(OrderStatus::Draft).await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].order_number, "ORD-DRAFT");
    }

    #[tokio::test]
    async fn update_missing_order_is_not_found() {
        let store = InMemoryOrderStore::new();
        let order = sample_order("ORD-GHOST");
        let result = store.update(order).await;
        assert_matches!(result, Err(ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn append_history_reaches_stored_order() {
        let store = InMemoryOrderStore::new();
        let order = sample_order("ORD-1");
        let id = order.id;
        store.insert(order).await.unwrap();

        store
            .append_history(id, HistoryEntry::new(HistoryKind::Comment, "Note", "Manager"))
            .await
            .unwrap();

        let fetched = store.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.history.len(), 1);
        assert_eq!(fetched.history[0].kind, HistoryKind::Comment);
    }
}
