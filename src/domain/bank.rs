use std::collections::HashMap;
use std::io::{self, Write};

use crate::common::money::Money;
use crate::domain::account::Account;

/// Account numbers are handed out from here, one per opened account, never
/// reissued within a session even after the account is closed.
const FIRST_ACCOUNT_NUMBER: u32 = 1000;

/// The ledger: owns every account and implements the cross-account
/// operations (transfer, cancellation, loans, statements).
///
/// Fallible operations report through `bool` or `Option` rather than an
/// error type; invalid amounts and missing accounts are normal outcomes
/// here, not exceptional ones.
#[derive(Debug)]
pub struct Bank {
    accounts: HashMap<u32, Account>,
    next_account_number: u32,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl Bank {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            next_account_number: FIRST_ACCOUNT_NUMBER,
        }
    }

    pub fn accounts(&self) -> &HashMap<u32, Account> {
        &self.accounts
    }

    pub fn get_account(&self, number: u32) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn get_account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// Opens an account with a zero balance under the next free account
    /// number and returns it.
    pub fn open_account(&mut self, holder: String) -> &Account {
        let number = self.next_account_number;
        self.next_account_number += 1;
        self.accounts
            .entry(number)
            .or_insert_with(|| Account::new(number, holder))
    }

    /// Removes the account. Returns whether it existed. The account number
    /// is retired either way.
    pub fn close_account(&mut self, number: u32) -> bool {
        self.accounts.remove(&number).is_some()
    }

    /// Balance lookup with a zero sentinel for missing accounts; absence is
    /// not distinguishable from an empty account here.
    pub fn check_balance(&self, number: u32) -> Money {
        self.accounts
            .get(&number)
            .map(Account::balance)
            .unwrap_or_else(Money::zero)
    }

    pub fn update_account_holder_info(&mut self, number: u32, new_name: String) {
        if let Some(account) = self.accounts.get_mut(&number) {
            account.set_holder(new_name);
        }
    }

    /// A loan is a plain deposit; there is no liability ledger behind it.
    pub fn request_loan(&mut self, number: u32, amount: Money) -> bool {
        match self.accounts.get_mut(&number) {
            Some(account) if amount.is_positive() => {
                account.deposit(amount);
                true
            }
            _ => false,
        }
    }

    /// Repays by withdrawing. A failed withdrawal (overdraft) is swallowed;
    /// callers can only observe it through the balance.
    pub fn pay_loan(&mut self, number: u32, amount: Money) {
        if let Some(account) = self.accounts.get_mut(&number) {
            if amount.is_positive() {
                account.withdraw(amount);
            }
        }
    }

    /// Moves `amount` from one account to the other and records the transfer
    /// in both histories. Fails without any state change if either account
    /// is missing or the source withdrawal is rejected.
    ///
    /// A self-transfer is not special-cased: the withdraw and deposit hit
    /// the same balance and the history receives two identical entries.
    pub fn transfer(&mut self, from: u32, to: u32, amount: Money) -> bool {
        if !self.accounts.contains_key(&from) || !self.accounts.contains_key(&to) {
            return false;
        }

        match self.accounts.get_mut(&from) {
            Some(source) => {
                if !source.withdraw(amount) {
                    return false;
                }
            }
            None => return false,
        }

        if let Some(destination) = self.accounts.get_mut(&to) {
            destination.deposit(amount);
        }
        if let Some(source) = self.accounts.get_mut(&from) {
            source.record_transfer(from, to, amount);
        }
        if let Some(destination) = self.accounts.get_mut(&to) {
            destination.record_transfer(from, to, amount);
        }
        true
    }

    /// Reverses the most recent transfer recorded on `number`: pulls the
    /// amount back from the destination, re-credits this account, and drops
    /// the last history entry on both sides.
    ///
    /// Fails with no state change when the account or its last transfer is
    /// missing, when the destination no longer exists, or when the
    /// destination can no longer cover the amount.
    ///
    /// The destination side removes whatever is currently last in *its*
    /// history; there is no check that it matches the entry being
    /// cancelled. Intervening transfers on the destination can therefore
    /// leave mismatched histories behind.
    pub fn cancel_last_transaction(&mut self, number: u32) -> bool {
        let last = match self.accounts.get(&number).and_then(Account::last_transfer) {
            Some(transfer) => *transfer,
            None => return false,
        };

        match self.accounts.get_mut(&last.to) {
            Some(destination) => {
                if !destination.withdraw(last.amount) {
                    return false;
                }
            }
            None => return false,
        }

        if let Some(account) = self.accounts.get_mut(&number) {
            account.deposit(last.amount);
            account.remove_last_transfer();
        }
        if let Some(destination) = self.accounts.get_mut(&last.to) {
            destination.remove_last_transfer();
        }
        true
    }

    /// Writes a one-line statement for the account, or a not-found line,
    /// to the given sink.
    pub fn print_statement<W: Write>(&self, number: u32, out: &mut W) -> io::Result<()> {
        match self.accounts.get(&number) {
            Some(account) => writeln!(
                out,
                "Account Number: {}, Balance: {}, Account Holder: {}",
                account.number(),
                account.balance(),
                account.holder()
            ),
            None => writeln!(out, "Account not found."),
        }
    }
}
