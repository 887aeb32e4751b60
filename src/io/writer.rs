use std::io::{self, Write};

use crate::domain::bank::Bank;

/// Writes one statement line per open account to the sink.
///
/// Account statements come out sorted by account number ascending so the
/// summary is deterministic regardless of map iteration order.
///
/// # Examples
///
/// ```
/// use bank_ledger::domain::bank::Bank;
/// use bank_ledger::io::writer::write_statements;
///
/// let mut bank = Bank::new();
/// bank.open_account("Alice".to_string());
///
/// let mut out = Vec::new();
/// write_statements(&mut out, &bank).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "Account Number: 1000, Balance: 0.0000, Account Holder: Alice\n");
/// ```
pub fn write_statements<W: Write>(mut writer: W, bank: &Bank) -> io::Result<()> {
    let mut numbers: Vec<u32> = bank.accounts().keys().copied().collect();
    numbers.sort_unstable();

    for number in numbers {
        bank.print_statement(number, &mut writer)?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;
    use std::str::FromStr;

    // Helper: writes statements to a Vec<u8> and returns UTF-8 string.
    fn write_to_string(bank: &Bank) -> String {
        let mut out = Vec::new();
        write_statements(&mut out, bank).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_rows_in_sorted_account_order() {
        let mut bank = Bank::new();
        bank.open_account("Alice".to_string());
        bank.open_account("Bob".to_string());
        bank.get_account_mut(1001)
            .expect("bob exists")
            .deposit(Money::from_str("40").unwrap());

        let s = write_to_string(&bank);
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Account Number: 1000, Balance: 0.0000, Account Holder: Alice"
        );
        assert_eq!(
            lines[1],
            "Account Number: 1001, Balance: 40.0000, Account Holder: Bob"
        );
    }

    #[test]
    fn closed_accounts_do_not_appear() {
        let mut bank = Bank::new();
        bank.open_account("Alice".to_string());
        bank.open_account("Bob".to_string());
        assert!(bank.close_account(1000));

        let s = write_to_string(&bank);
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Account Number: 1001,"));
    }

    #[test]
    fn empty_bank_writes_nothing() {
        let bank = Bank::new();
        assert_eq!(write_to_string(&bank), "");
    }
}
