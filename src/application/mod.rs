//! Application layer containing the allocation logic.
//!
//! Orders are ranked once by the best discount they could earn, then the
//! [`allocator::Allocator`] walks them in that order, generating the payment
//! options that fit the remaining budgets and committing the best one.

pub mod allocator;
pub mod options;
pub mod ranking;
