use super::money::Money;
use super::payment_method::PaymentMethod;
use super::ports::BudgetView;
use crate::error::{OptimizerError, Result};
use std::collections::HashMap;

/// Amount spent through one payment method over the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodUsage {
    pub method_id: String,
    pub spent: Money,
}

/// Payment methods with their remaining budgets.
///
/// Methods keep their input order. Remaining budgets start at each method's
/// limit and only go down, through [`Catalog::debit`] or [`Catalog::debit_all`].
#[derive(Debug, Clone)]
pub struct Catalog {
    methods: Vec<PaymentMethod>,
    index: HashMap<String, usize>,
    remaining: Vec<Money>,
    points_method_id: String,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate method identifiers.
    pub fn new(methods: Vec<PaymentMethod>, points_method_id: impl Into<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(methods.len());
        for (position, method) in methods.iter().enumerate() {
            if index.insert(method.id.clone(), position).is_some() {
                return Err(OptimizerError::ValidationError(format!(
                    "Duplicate payment method id: {}",
                    method.id
                )));
            }
        }
        let remaining = methods.iter().map(|m| m.limit).collect();

        Ok(Self {
            methods,
            index,
            remaining,
            points_method_id: points_method_id.into(),
        })
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| OptimizerError::NotFound(id.to_string()))
    }

    pub fn method(&self, id: &str) -> Result<&PaymentMethod> {
        let position = self.position(id)?;
        Ok(&self.methods[position])
    }

    pub fn remaining(&self, id: &str) -> Result<Money> {
        let position = self.position(id)?;
        Ok(self.remaining[position])
    }

    /// Debits `amount` from a single method. Fails without side effects when
    /// the remaining budget does not cover it.
    pub fn debit(&mut self, id: &str, amount: Money) -> Result<()> {
        self.debit_all(&[(id, amount)])
    }

    /// Debits several amounts as one unit.
    ///
    /// Amounts against the same method are summed and checked together, and
    /// nothing is applied unless every method can cover its share.
    pub fn debit_all(&mut self, debits: &[(&str, Money)]) -> Result<()> {
        let mut totals: Vec<(usize, Money)> = Vec::with_capacity(debits.len());
        for &(id, amount) in debits {
            let position = self.position(id)?;
            match totals.iter_mut().find(|(p, _)| *p == position) {
                Some((_, total)) => *total += amount,
                None => totals.push((position, amount)),
            }
        }

        let mut updated = Vec::with_capacity(totals.len());
        for (position, amount) in totals {
            let remaining = self.remaining[position];
            let left = remaining.checked_sub(amount).ok_or_else(|| {
                OptimizerError::InsufficientBudget {
                    method: self.methods[position].id.clone(),
                    requested: amount,
                    remaining,
                }
            })?;
            updated.push((position, left));
        }

        for (position, left) in updated {
            self.remaining[position] = left;
        }
        Ok(())
    }

    /// Amount spent per method, in input order.
    pub fn usage(&self) -> Vec<MethodUsage> {
        self.methods
            .iter()
            .zip(&self.remaining)
            .map(|(method, &remaining)| MethodUsage {
                method_id: method.id.clone(),
                spent: method.limit - remaining,
            })
            .collect()
    }
}

impl BudgetView for Catalog {
    fn methods(&self) -> &[PaymentMethod] {
        &self.methods
    }

    fn method(&self, id: &str) -> Option<&PaymentMethod> {
        Catalog::method(self, id).ok()
    }

    fn remaining_budget(&self, id: &str) -> Option<Money> {
        self.remaining(id).ok()
    }

    fn points_method_id(&self) -> &str {
        &self.points_method_id
    }
}
