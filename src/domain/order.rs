use super::money::Money;
use serde::Deserialize;

/// A purchase waiting to be paid for.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub id: String,
    pub value: Money,
    /// Payment methods that grant their full-order discount on this order.
    #[serde(default)]
    pub promotions: Option<Vec<String>>,
}

impl Order {
    pub fn new(id: impl Into<String>, value: Money) -> Self {
        Self {
            id: id.into(),
            value,
            promotions: None,
        }
    }

    pub fn with_promotions<I, S>(mut self, promotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.promotions = Some(promotions.into_iter().map(Into::into).collect());
        self
    }

    /// Promotion identifiers, empty when none were given.
    pub fn promotions(&self) -> &[String] {
        self.promotions.as_deref().unwrap_or_default()
    }
}
