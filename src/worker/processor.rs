use std::io::Write;

use log::{info, warn};

use crate::{
    common::{command::BankCommand, error::AppError},
    domain::bank::Bank,
};

/// Executes parsed commands against a [`Bank`].
///
/// The bank's operations report failure through their return values; the
/// processor's job is to apply each command, surface rejections in the log,
/// and route statement output into the sink it owns. Rejected commands are
/// not errors: processing always continues with the next command.
#[derive(Debug)]
pub struct Processor<W: Write> {
    out: W,
}

impl<W: Write> Processor<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Releases the output sink, for writing anything after the command
    /// stream is done.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn process(&mut self, bank: &mut Bank, command: BankCommand) -> Result<(), AppError> {
        match command {
            BankCommand::Open { holder } => {
                let account = bank.open_account(holder);
                info!(
                    "opened account {} for {}",
                    account.number(),
                    account.holder()
                );
            }
            BankCommand::Close { account } => {
                if !bank.close_account(account) {
                    warn!("close rejected: account {account} not found");
                }
            }
            BankCommand::Deposit { account, amount } => match bank.get_account_mut(account) {
                Some(acc) => acc.deposit(amount),
                None => warn!("deposit rejected: account {account} not found"),
            },
            BankCommand::Withdraw { account, amount } => match bank.get_account_mut(account) {
                Some(acc) => {
                    if !acc.withdraw(amount) {
                        warn!("withdraw of {amount} rejected for account {account}");
                    }
                }
                None => warn!("withdraw rejected: account {account} not found"),
            },
            BankCommand::Transfer { from, to, amount } => {
                if !bank.transfer(from, to, amount) {
                    warn!("transfer of {amount} from {from} to {to} rejected");
                }
            }
            BankCommand::Cancel { account } => {
                if !bank.cancel_last_transaction(account) {
                    warn!("cancel rejected for account {account}");
                }
            }
            BankCommand::RequestLoan { account, amount } => {
                if !bank.request_loan(account, amount) {
                    warn!("loan of {amount} rejected for account {account}");
                }
            }
            BankCommand::PayLoan { account, amount } => {
                // repayment failure is only observable through the balance
                bank.pay_loan(account, amount);
            }
            BankCommand::Rename { account, holder } => {
                bank.update_account_holder_info(account, holder);
            }
            BankCommand::Statement { account } => {
                bank.print_statement(account, &mut self.out)?;
            }
        }
        Ok(())
    }
}
