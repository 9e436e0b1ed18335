#![allow(dead_code)]

use payment_optimizer::domain::money::{Money, Percent};
use payment_optimizer::domain::order::Order;
use payment_optimizer::domain::payment_method::PaymentMethod;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const POINTS: &str = "PUNKTY";
const CARDS: [&str; 4] = ["mZysk", "BosBankrut", "Alior", "Pekao"];

pub fn write_json(contents: &str) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn cents(value: i64) -> Money {
    Money::new(Decimal::new(value, 2)).unwrap()
}

/// Random batch: points plus four cards with tight budgets, orders with a
/// mix of known and unknown promotions.
pub fn random_batch(seed: u64, order_count: usize) -> (Vec<Order>, Vec<PaymentMethod>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut methods = vec![PaymentMethod::new(
        POINTS,
        Percent::new(rng.gen_range(0..=25)).unwrap(),
        cents(rng.gen_range(0..=40_000)),
    )];
    for card in CARDS {
        methods.push(PaymentMethod::new(
            card,
            Percent::new(rng.gen_range(0..=20)).unwrap(),
            cents(rng.gen_range(0..=80_000)),
        ));
    }

    let orders = (1..=order_count)
        .map(|i| {
            let order = Order::new(format!("ORDER{i}"), cents(rng.gen_range(0..=30_000)));
            let promotions: Vec<&str> = CARDS
                .iter()
                .copied()
                .chain(["GHOST"])
                .filter(|_| rng.gen_bool(0.3))
                .collect();
            if promotions.is_empty() && rng.gen_bool(0.5) {
                order
            } else {
                order.with_promotions(promotions)
            }
        })
        .collect();

    (orders, methods)
}
