use super::money::Money;
use super::order::Order;

/// How an order gets paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// Whole order through a promoted method, at that method's discount.
    Promotion { method_id: String },
    /// Whole order in loyalty points, at the points discount.
    Points,
    /// Part in points, at least the combo minimum, the rest on a card, for a flat discount.
    Combo { card_id: String },
}

impl OptionKind {
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Promotion { .. } => "promotion",
            OptionKind::Points => "points",
            OptionKind::Combo { .. } => "combo",
        }
    }
}

/// A candidate way of paying one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOption {
    pub kind: OptionKind,
    pub discount: Money,
    pub points_used: Money,
}

impl PaymentOption {
    /// Method receiving the part of the order not paid in points.
    pub fn method_id<'a>(&'a self, points_method_id: &'a str) -> &'a str {
        match &self.kind {
            OptionKind::Promotion { method_id } => method_id,
            OptionKind::Points => points_method_id,
            OptionKind::Combo { card_id } => card_id,
        }
    }

    /// What remains to be paid outside points: value minus discount minus points.
    pub fn card_payment(&self, order: &Order) -> Money {
        order.value - self.discount - self.points_used
    }

    /// Budget debits needed to commit this option, points first.
    pub fn debits<'a>(&'a self, order: &Order, points_method_id: &'a str) -> Vec<(&'a str, Money)> {
        let mut debits = Vec::with_capacity(2);
        if !self.points_used.is_zero() {
            debits.push((points_method_id, self.points_used));
        }
        debits.push((self.method_id(points_method_id), self.card_payment(order)));
        debits
    }
}
