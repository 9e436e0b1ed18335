use crate::domain::money::{Money, Percent};
use crate::domain::option::{OptionKind, PaymentOption};
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::BudgetView;
use tracing::debug;

/// Smallest share of an order that must be paid in points to earn the combo discount.
pub const COMBO_MIN_POINTS_SHARE: Percent = Percent::saturating(10);
/// Flat discount earned by the combo, however many points it uses.
pub const COMBO_DISCOUNT: Percent = Percent::saturating(10);
/// Share of the order left to pay after the combo discount.
const COMBO_PAYABLE_SHARE: Percent = Percent::saturating(90);

/// Generates every payment option for `order` that fits the budgets visible
/// through `budgets`.
///
/// Options come out in a fixed order: promotions in the order's own order,
/// then full points, then the combo.
pub fn generate_options(order: &Order, budgets: &impl BudgetView) -> Vec<PaymentOption> {
    let mut options = promotion_options(order, budgets);
    options.extend(points_option(order, budgets));
    options.extend(combo_option(order, budgets));
    options
}

fn covers(budgets: &impl BudgetView, method_id: &str, amount: Money) -> bool {
    budgets
        .remaining_budget(method_id)
        .is_some_and(|remaining| remaining >= amount)
}

fn promotion_options(order: &Order, budgets: &impl BudgetView) -> Vec<PaymentOption> {
    let mut options = Vec::new();
    for promotion in order.promotions() {
        let Some(method) = budgets.method(promotion) else {
            debug!(order_id = %order.id, method_id = %promotion, "skipping unknown promotion");
            continue;
        };

        let discount = method.discount.of(order.value);
        if covers(budgets, &method.id, order.value - discount) {
            options.push(PaymentOption {
                kind: OptionKind::Promotion {
                    method_id: method.id.clone(),
                },
                discount,
                points_used: Money::ZERO,
            });
        }
    }
    options
}

fn points_option(order: &Order, budgets: &impl BudgetView) -> Option<PaymentOption> {
    let points = budgets.points_method()?;
    let discount = points.discount.of(order.value);
    let required = order.value - discount;

    covers(budgets, &points.id, required).then_some(PaymentOption {
        kind: OptionKind::Points,
        discount,
        points_used: required,
    })
}

fn combo_option(order: &Order, budgets: &impl BudgetView) -> Option<PaymentOption> {
    let points = budgets.points_method()?;
    let available = budgets.remaining_budget(&points.id)?;
    let minimum = COMBO_MIN_POINTS_SHARE.of(order.value);
    if available < minimum {
        return None;
    }

    // As many points as possible, between the minimum and the whole payable share.
    let payable = COMBO_PAYABLE_SHARE.of(order.value);
    let points_used = payable.min(available).max(minimum);
    let card = best_card(budgets, &points.id, payable - points_used)?;

    Some(PaymentOption {
        kind: OptionKind::Combo {
            card_id: card.id.clone(),
        },
        discount: COMBO_DISCOUNT.of(order.value),
        points_used,
    })
}

/// Highest-discount non-points method able to pay `amount`; ties go to the
/// lexicographically smallest id.
fn best_card<'v>(
    budgets: &'v impl BudgetView,
    points_method_id: &str,
    amount: Money,
) -> Option<&'v PaymentMethod> {
    budgets
        .methods()
        .iter()
        .filter(|method| method.id != points_method_id)
        .filter(|method| covers(budgets, &method.id, amount))
        .min_by(|a, b| b.discount.cmp(&a.discount).then_with(|| a.id.cmp(&b.id)))
}
