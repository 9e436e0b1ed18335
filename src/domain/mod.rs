//! Domain model: money, orders, payment methods and the budget catalog.

pub mod allocation;
pub mod catalog;
pub mod money;
pub mod option;
pub mod order;
pub mod payment_method;
pub mod ports;
