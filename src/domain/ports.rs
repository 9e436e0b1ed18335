use super::money::Money;
use super::payment_method::PaymentMethod;

/// Read access to payment methods and their remaining budgets.
///
/// Option generation and ranking only ever read through this trait, so the
/// allocator stays the only code able to debit a budget.
pub trait BudgetView {
    /// All payment methods in input order.
    fn methods(&self) -> &[PaymentMethod];

    fn method(&self, id: &str) -> Option<&PaymentMethod>;

    fn remaining_budget(&self, id: &str) -> Option<Money>;

    fn points_method_id(&self) -> &str;

    fn points_method(&self) -> Option<&PaymentMethod> {
        self.method(self.points_method_id())
    }
}
