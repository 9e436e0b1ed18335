use super::options::COMBO_DISCOUNT;
use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::domain::ports::BudgetView;

/// Best discount `order` could possibly earn, ignoring budgets.
///
/// Takes the largest of the points discount, every known promotion's
/// discount and the flat combo discount. It is an upper bound on what the
/// allocator can actually achieve for the order.
pub fn max_discount(order: &Order, budgets: &impl BudgetView) -> Money {
    let points = budgets
        .points_method()
        .map(|method| method.discount.of(order.value));
    let promotions = order
        .promotions()
        .iter()
        .filter_map(|id| budgets.method(id))
        .map(|method| method.discount.of(order.value));

    points
        .into_iter()
        .chain(promotions)
        .fold(COMBO_DISCOUNT.of(order.value), Money::max)
}

/// Orders sorted by [`max_discount`], highest first; ties by order id.
pub fn rank_orders<'a>(orders: &'a [Order], budgets: &impl BudgetView) -> Vec<&'a Order> {
    let mut scored: Vec<(Money, &Order)> = orders
        .iter()
        .map(|order| (max_discount(order, budgets), order))
        .collect();
    scored.sort_by(|(score_a, a), (score_b, b)| score_b.cmp(score_a).then_with(|| a.id.cmp(&b.id)));
    scored.into_iter().map(|(_, order)| order).collect()
}
