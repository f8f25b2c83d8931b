use serde::{Deserialize, Serialize};

use pedidos_catalog::Product;
use pedidos_core::{Entity, OrderId};

/// Customer classification. Closed set: no other tiers exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Standard,
    Premium,
    Vip,
}

/// Order lifecycle status. Closed set: no other states exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

/// Aggregate: a fully-constructed customer order.
///
/// Orders are built once by the caller and then only read; the classifiers
/// borrow them immutably and keep no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    customer_type: CustomerType,
    status: OrderStatus,
    total_value: f64,
    items: Vec<Product>,
}

impl Order {
    /// Create an order from caller-supplied parts.
    ///
    /// `total_value` is taken as given and never recomputed from `items`.
    pub fn new(
        order_id: impl Into<OrderId>,
        customer_type: CustomerType,
        status: OrderStatus,
        total_value: f64,
        items: Vec<Product>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_type,
            status,
            total_value,
            items,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn customer_type(&self) -> CustomerType {
        self.customer_type
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Monetary total as supplied at construction.
    ///
    /// Not cross-checked against item prices; if this order feeds a system
    /// that derives totals, reconcile at that boundary.
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Total shipping weight: the sum of `weight_in_kg` over physical items.
    ///
    /// Digital items are filtered out before summation rather than summed as
    /// zero-weight.
    pub fn physical_weight_kg(&self) -> f64 {
        self.items
            .iter()
            .filter_map(Product::as_physical)
            .map(|p| p.weight_in_kg)
            .sum()
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self.status, OrderStatus::Delivered)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}
