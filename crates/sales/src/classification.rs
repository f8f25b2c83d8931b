//! Order-classification rules.
//!
//! Four pure, total, stateless functions mapping order/customer/product
//! attributes to categorical outcomes. Each rule set is written as a single
//! `match` whose arm order is the rule order: for shipping fees and order
//! bonuses the guards overlap, so first-match-wins resolution is
//! load-bearing and the arms must not be reordered.

use serde::{Deserialize, Serialize};

use pedidos_catalog::Product;

use crate::order::{CustomerType, Order, OrderStatus};

/// Discount tier derived from an order's total monetary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountTier {
    None,
    Ten,
    Twenty,
    Vip,
}

impl DiscountTier {
    /// Customer-facing label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            DiscountTier::None => "Nenhum desconto",
            DiscountTier::Ten => "10% de desconto",
            DiscountTier::Twenty => "20% de desconto",
            DiscountTier::Vip => "Desconto VIP",
        }
    }
}

impl core::fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an order total into a discount tier.
///
/// Ranges are closed on the lower end and open on the upper end, and they
/// partition the number line: every total maps to exactly one tier. Negative
/// totals classify as [`DiscountTier::None`]; rejecting them is the caller's
/// concern.
pub fn classify_discount_tier(total: f64) -> DiscountTier {
    match total {
        t if t < 100.0 => DiscountTier::None,
        t if t < 500.0 => DiscountTier::Ten,
        t if t < 1000.0 => DiscountTier::Twenty,
        _ => DiscountTier::Vip,
    }
}

/// Shipping fee from destination code and total physical weight (kg).
///
/// Destination matching is case-sensitive exact equality against "RJ" and
/// "SP"; any other code falls through to the weight-only rules. Unlike the
/// discount ranges, these guards overlap, so the arm order is the rule
/// order.
pub fn calculate_shipping_fee(destination: &str, total_weight_kg: f64) -> f64 {
    match (destination, total_weight_kg) {
        ("RJ", w) if w < 1.0 => 5.0,
        ("RJ", _) => 10.0,
        ("SP", w) if w < 1.0 => 7.0,
        ("SP", _) => 12.0,
        (_, w) if w > 5.0 => 30.0,
        _ => 15.0,
    }
}

/// Bonus message for a customer/status combination.
///
/// Two-tier loyalty policy, deliberate asymmetry: Premium customers only
/// earn a bonus once delivered, while VIP customers always earn one (the
/// loyalty bonus on delivery wins over the welcome bonus).
pub fn evaluate_order_bonus(customer_type: CustomerType, status: OrderStatus) -> &'static str {
    match (customer_type, status) {
        (CustomerType::Vip | CustomerType::Premium, OrderStatus::Delivered) => {
            "Bônus de fidelidade concedido!"
        }
        (CustomerType::Vip, _) => "Bônus especial de boas-vindas!",
        _ => "Sem bônus aplicável.",
    }
}

/// Human-readable processing description for a single item.
///
/// Dispatches exhaustively over the closed product sum; physical items
/// heavier than 1 kg get the heavy-item message. Printing the result is the
/// caller's concern.
pub fn describe_item(item: &Product) -> String {
    match item {
        Product::Physical(p) if p.weight_in_kg > 1.0 => format!(
            "📦 Processando produto físico pesado: {}. Peso: {} kg.",
            p.name, p.weight_in_kg
        ),
        Product::Physical(p) => format!("📦 Processando produto físico: {}.", p.name),
        Product::Digital(d) => format!(
            "💻 Processando produto digital: {}. Link: {}",
            d.name, d.download_link
        ),
    }
}

impl Order {
    /// Discount tier for this order's total.
    pub fn discount_tier(&self) -> DiscountTier {
        classify_discount_tier(self.total_value())
    }

    /// Shipping fee for this order to `destination`, using the summed
    /// weight of its physical items.
    pub fn shipping_fee(&self, destination: &str) -> f64 {
        calculate_shipping_fee(destination, self.physical_weight_kg())
    }

    /// Bonus message for this order's customer and status.
    pub fn bonus(&self) -> &'static str {
        evaluate_order_bonus(self.customer_type(), self.status())
    }
}
