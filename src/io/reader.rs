use crate::common::{command::BankCommand, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Unused
/// columns stay empty depending on the command.
struct CsvRow {
    command: String,
    account: Option<u32>,
    to: Option<u32>,
    amount: Option<String>,
    name: Option<String>,
}

fn require_account(kind: &str, account: Option<u32>) -> Result<u32, String> {
    account.ok_or_else(|| format!("{kind} missing account number"))
}

fn require_amount(kind: &str, account: u32, amount: Option<String>) -> Result<Money, String> {
    let raw = amount.ok_or_else(|| format!("{kind} missing amount for account {account}"))?;
    Money::from_str(&raw).map_err(|e| format!("{kind} bad amount for account {account}: {e}"))
}

fn require_name(kind: &str, name: Option<String>) -> Result<String, String> {
    name.ok_or_else(|| format!("{kind} missing name"))
}

/// Reads and validates bank commands from a CSV reader.
///
/// Supported headers: `command,account,to,amount,name`. The `command` field
/// is normalized to lowercase; each command requires its own subset of the
/// remaining columns and errors carry the account context.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::reader::read_commands;
/// use bank_ledger::common::command::BankCommand;
/// use csv::ReaderBuilder;
///
/// let data = "command,account,to,amount,name\n\
/// open,,,,Alice\n\
/// deposit,1000,,100.0,\n";
/// let mut rdr = ReaderBuilder::new().flexible(true).from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(BankCommand::Open { .. })));
/// assert!(matches!(commands[1], Ok(BankCommand::Deposit { account: 1000, .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<BankCommand, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.command.trim().to_ascii_lowercase();

        match kind.as_str() {
            "open" => Ok(BankCommand::Open {
                holder: require_name(&kind, row.name)?,
            }),
            "close" => Ok(BankCommand::Close {
                account: require_account(&kind, row.account)?,
            }),
            "deposit" => {
                let account = require_account(&kind, row.account)?;
                Ok(BankCommand::Deposit {
                    account,
                    amount: require_amount(&kind, account, row.amount)?,
                })
            }
            "withdraw" => {
                let account = require_account(&kind, row.account)?;
                Ok(BankCommand::Withdraw {
                    account,
                    amount: require_amount(&kind, account, row.amount)?,
                })
            }
            "transfer" => {
                let from = require_account(&kind, row.account)?;
                let to = row
                    .to
                    .ok_or_else(|| format!("transfer missing destination for account {from}"))?;
                Ok(BankCommand::Transfer {
                    from,
                    to,
                    amount: require_amount(&kind, from, row.amount)?,
                })
            }
            "cancel" => Ok(BankCommand::Cancel {
                account: require_account(&kind, row.account)?,
            }),
            "loan" => {
                let account = require_account(&kind, row.account)?;
                Ok(BankCommand::RequestLoan {
                    account,
                    amount: require_amount(&kind, account, row.amount)?,
                })
            }
            "payloan" => {
                let account = require_account(&kind, row.account)?;
                Ok(BankCommand::PayLoan {
                    account,
                    amount: require_amount(&kind, account, row.amount)?,
                })
            }
            "rename" => {
                let account = require_account(&kind, row.account)?;
                Ok(BankCommand::Rename {
                    account,
                    holder: require_name(&kind, row.name)?,
                })
            }
            "statement" => Ok(BankCommand::Statement {
                account: require_account(&kind, row.account)?,
            }),
            other => Err(format!("unknown command: {other}")),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    // Helper: parse CSV input into collected commands for assertions.
    fn collect_commands(input: &str) -> Vec<Result<BankCommand, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input.as_bytes());
        read_commands(&mut reader).collect()
    }

    #[test]
    fn parses_all_supported_commands() {
        let data = "command,account,to,amount,name\n\
open,,,,Alice\n\
close,1000,,,\n\
deposit,1000,,100.0,\n\
withdraw,1000,,25.0,\n\
transfer,1000,1001,40.0,\n\
cancel,1000,,,\n\
loan,1000,,50.0,\n\
payloan,1000,,50.0,\n\
rename,1000,,,Alice Smith\n\
statement,1000,,,\n";
        let commands = collect_commands(data);

        assert_eq!(commands.len(), 10);

        match &commands[0] {
            Ok(BankCommand::Open { holder }) => assert_eq!(holder, "Alice"),
            other => panic!("unexpected open command: {other:?}"),
        }
        assert!(matches!(commands[1], Ok(BankCommand::Close { account: 1000 })));

        let expected = Money::from_str("100.0").unwrap();
        match &commands[2] {
            Ok(BankCommand::Deposit { account, amount }) => {
                assert_eq!((*account, *amount), (1000, expected));
            }
            other => panic!("unexpected deposit command: {other:?}"),
        }
        assert!(matches!(
            commands[3],
            Ok(BankCommand::Withdraw { account: 1000, .. })
        ));
        match &commands[4] {
            Ok(BankCommand::Transfer { from, to, amount }) => {
                assert_eq!((*from, *to), (1000, 1001));
                assert_eq!(*amount, Money::from_str("40.0").unwrap());
            }
            other => panic!("unexpected transfer command: {other:?}"),
        }
        assert!(matches!(commands[5], Ok(BankCommand::Cancel { account: 1000 })));
        assert!(matches!(
            commands[6],
            Ok(BankCommand::RequestLoan { account: 1000, .. })
        ));
        assert!(matches!(
            commands[7],
            Ok(BankCommand::PayLoan { account: 1000, .. })
        ));
        match &commands[8] {
            Ok(BankCommand::Rename { account, holder }) => {
                assert_eq!(*account, 1000);
                assert_eq!(holder, "Alice Smith");
            }
            other => panic!("unexpected rename command: {other:?}"),
        }
        assert!(matches!(
            commands[9],
            Ok(BankCommand::Statement { account: 1000 })
        ));
    }

    #[test]
    fn reports_missing_amount() {
        let data = "command,account,to,amount,name\n\
deposit,1000,,,\n";
        let commands = collect_commands(data);

        assert_eq!(commands.len(), 1);
        let err = commands.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "deposit missing amount for account 1000");
    }

    #[test]
    fn reports_missing_name_for_open() {
        let data = "command,account,to,amount,name\n\
open,,,,\n";
        let commands = collect_commands(data);

        let err = commands.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "open missing name");
    }

    #[test]
    fn reports_missing_transfer_destination() {
        let data = "command,account,to,amount,name\n\
transfer,1000,,40.0,\n";
        let commands = collect_commands(data);

        let err = commands.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "transfer missing destination for account 1000");
    }

    #[test]
    fn reports_unknown_command() {
        let data = "command,account,to,amount,name\n\
audit,1000,,,\n";
        let commands = collect_commands(data);

        let err = commands.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "unknown command: audit");
    }

    #[test]
    fn reports_bad_amount() {
        let data = "command,account,to,amount,name\n\
deposit,1000,,abc,\n";
        let commands = collect_commands(data);

        let err = commands.into_iter().next().unwrap().unwrap_err();
        assert!(err.starts_with("deposit bad amount for account 1000"));
    }
}
