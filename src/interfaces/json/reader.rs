use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::io::{BufReader, Read};

/// Reads the batch of orders from a JSON array.
pub struct OrderReader<R: Read> {
    source: R,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Deserializes every order. Negative values fail the whole read.
    pub fn orders(self) -> Result<Vec<Order>> {
        read_array(self.source)
    }
}

/// Reads payment methods from a JSON array, keeping their input order.
pub struct PaymentMethodReader<R: Read> {
    source: R,
}

impl<R: Read> PaymentMethodReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn payment_methods(self) -> Result<Vec<PaymentMethod>> {
        read_array(self.source)
    }
}

fn read_array<T: DeserializeOwned, R: Read>(source: R) -> Result<Vec<T>> {
    Ok(serde_json::from_reader(BufReader::new(source))?)
}
