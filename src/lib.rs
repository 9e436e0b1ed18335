//! Greedy allocation of payment methods and loyalty points to a batch of
//! orders, maximizing the total discount within each method's budget.

pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;
