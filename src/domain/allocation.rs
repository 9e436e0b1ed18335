use super::catalog::MethodUsage;
use super::money::Money;
use super::option::PaymentOption;

/// Final state of an order once the allocator has visited it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Committed(PaymentOption),
    /// No option fitted the remaining budgets.
    Unpaid,
}

impl OrderOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, OrderOutcome::Committed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub order_id: String,
    pub order_value: Money,
    pub outcome: OrderOutcome,
}

/// Result of allocating a whole batch.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationReport {
    /// One entry per distinct order, in processing order.
    pub assignments: Vec<Assignment>,
    /// Spending per payment method, in input order.
    pub usage: Vec<MethodUsage>,
}

impl AllocationReport {
    pub fn unpaid(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .iter()
            .filter(|a| !a.outcome.is_committed())
    }

    pub fn total_discount(&self) -> Money {
        self.assignments
            .iter()
            .filter_map(|a| match &a.outcome {
                OrderOutcome::Committed(option) => Some(option.discount),
                OrderOutcome::Unpaid => None,
            })
            .sum()
    }

    pub fn spent_by(&self, method_id: &str) -> Option<Money> {
        self.usage
            .iter()
            .find(|u| u.method_id == method_id)
            .map(|u| u.spent)
    }
}
