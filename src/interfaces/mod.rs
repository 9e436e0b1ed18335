//! Input and output adapters: JSON readers for the batch, CSV writers for results.

pub mod csv;
pub mod json;
