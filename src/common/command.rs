use crate::common::money::Money;

/// A parsed instruction sent from the reader to the worker for execution
/// against the bank.
#[derive(Debug)]
pub enum BankCommand {
    Open { holder: String },
    Close { account: u32 },
    Deposit { account: u32, amount: Money },
    Withdraw { account: u32, amount: Money },
    Transfer { from: u32, to: u32, amount: Money },
    Cancel { account: u32 },
    RequestLoan { account: u32, amount: Money },
    PayLoan { account: u32, amount: Money },
    Rename { account: u32, holder: String },
    Statement { account: u32 },
}
