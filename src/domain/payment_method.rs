use super::money::{Money, Percent};
use serde::Deserialize;

/// Identifier the loyalty-points method uses unless configured otherwise.
pub const DEFAULT_POINTS_METHOD_ID: &str = "PUNKTY";

/// A funding source with a discount rate and a fixed spending limit.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentMethod {
    pub id: String,
    /// Discount granted when this method pays for a whole order.
    pub discount: Percent,
    /// Total amount this method may pay across the batch.
    pub limit: Money,
}

impl PaymentMethod {
    pub fn new(id: impl Into<String>, discount: Percent, limit: Money) -> Self {
        Self {
            id: id.into(),
            discount,
            limit,
        }
    }
}
