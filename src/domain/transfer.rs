use crate::common::money::Money;

/// Record of a completed transfer, stored in the history of both endpoint
/// accounts. Plain value, no identity or timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub from: u32,
    pub to: u32,
    pub amount: Money,
}

impl Transfer {
    pub fn new(from: u32, to: u32, amount: Money) -> Self {
        Self { from, to, amount }
    }
}
