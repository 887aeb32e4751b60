use crate::common::money::Money;
use crate::domain::transfer::Transfer;

/// A single bank account: balance plus an ordered transfer history.
///
/// The balance is only reachable through [`deposit`](Account::deposit) and
/// [`withdraw`](Account::withdraw), which keep it non-negative. History is
/// append-only apart from `remove_last_transfer`, used when a transfer is
/// cancelled.
#[derive(Debug, Clone)]
pub struct Account {
    number: u32,
    holder: String,
    balance: Money,
    history: Vec<Transfer>,
}

impl Account {
    pub fn new(number: u32, holder: String) -> Self {
        Self {
            number,
            holder,
            balance: Money::zero(),
            history: Vec::new(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn set_holder(&mut self, holder: String) {
        self.holder = holder;
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &[Transfer] {
        &self.history
    }

    /// Credits the account. Zero or negative amounts are ignored, not
    /// reported.
    pub fn deposit(&mut self, amount: Money) {
        if amount.is_positive() {
            self.balance += amount;
        }
    }

    /// Debits the account. Returns `false` without touching the balance if
    /// the amount is not positive or exceeds the current balance.
    pub fn withdraw(&mut self, amount: Money) -> bool {
        if amount.is_positive() && amount <= self.balance {
            self.balance -= amount;
            return true;
        }
        false
    }

    /// Appends a transfer record unconditionally. Balances are not touched;
    /// the bank moves funds before recording.
    pub fn record_transfer(&mut self, from: u32, to: u32, amount: Money) {
        self.history.push(Transfer::new(from, to, amount));
    }

    pub fn last_transfer(&self) -> Option<&Transfer> {
        self.history.last()
    }

    pub fn remove_last_transfer(&mut self) {
        self.history.pop();
    }
}
