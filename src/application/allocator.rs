use super::options::generate_options;
use super::ranking::rank_orders;
use crate::domain::allocation::{AllocationReport, Assignment, OrderOutcome};
use crate::domain::catalog::Catalog;
use crate::domain::option::PaymentOption;
use crate::domain::order::Order;
use crate::domain::ports::BudgetView;
use crate::error::{OptimizerError, Result};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Assigns payment options to orders against a shared set of budgets.
///
/// The allocator owns the [`Catalog`] and is the only thing that debits it.
/// Orders are visited one at a time, so every decision sees the budgets left
/// by all earlier commits.
#[derive(Debug)]
pub struct Allocator {
    catalog: Catalog,
    decided: HashSet<String>,
}

impl Allocator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            decided: HashSet::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ranks `orders` once, then decides each of them in ranked order.
    ///
    /// Orders whose id was already decided are skipped with a warning.
    pub fn allocate(mut self, orders: &[Order]) -> AllocationReport {
        let ranked = rank_orders(orders, &self.catalog);

        let mut assignments = Vec::with_capacity(ranked.len());
        for order in ranked {
            match self.process_order(order) {
                Ok(outcome) => assignments.push(Assignment {
                    order_id: order.id.clone(),
                    order_value: order.value,
                    outcome,
                }),
                Err(e) => warn!(order_id = %order.id, error = %e, "Skipping order"),
            }
        }

        let report = AllocationReport {
            assignments,
            usage: self.catalog.usage(),
        };
        info!(
            orders = report.assignments.len(),
            unpaid = report.unpaid().count(),
            total_discount = %report.total_discount(),
            "Allocation finished"
        );
        report
    }

    /// Decides a single order against the current budgets.
    ///
    /// Candidates are tried by discount, then by points used, both descending;
    /// the first one whose debits fit is committed. An order can only be
    /// decided once.
    pub fn process_order(&mut self, order: &Order) -> Result<OrderOutcome> {
        if !self.decided.insert(order.id.clone()) {
            return Err(OptimizerError::DuplicateOrder(order.id.clone()));
        }

        let mut options = generate_options(order, &self.catalog);
        options.sort_by(|a, b| {
            b.discount
                .cmp(&a.discount)
                .then_with(|| b.points_used.cmp(&a.points_used))
        });

        for option in options {
            match self.commit(order, &option) {
                Ok(()) => {
                    debug!(
                        order_id = %order.id,
                        option = option.kind.label(),
                        discount = %option.discount,
                        points = %option.points_used,
                        "Committed payment option"
                    );
                    return Ok(OrderOutcome::Committed(option));
                }
                Err(e) => {
                    debug!(order_id = %order.id, error = %e, "Payment option no longer fits");
                }
            }
        }

        warn!(order_id = %order.id, value = %order.value, "No payment option fits, order left unpaid");
        Ok(OrderOutcome::Unpaid)
    }

    fn commit(&mut self, order: &Order, option: &PaymentOption) -> Result<()> {
        let points_method_id = self.catalog.points_method_id().to_string();
        let debits = option.debits(order, &points_method_id);
        self.catalog.debit_all(&debits)
    }
}
