//! Sales orders domain module.
//!
//! This crate contains the `Order` aggregate and the order-classification
//! rules (discount tier, shipping fee, order bonus, item description),
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod classification;
pub mod order;

pub use classification::{
    DiscountTier, calculate_shipping_fee, classify_discount_tier, describe_item,
    evaluate_order_bonus,
};
pub use order::{CustomerType, Order, OrderStatus};
