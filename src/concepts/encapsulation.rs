// Pattern 2: Encapsulation
// State is private to the module; all access goes through methods.

use crate::Transcript;

#[derive(Debug, Default)]
pub struct BankAccount {
    balance: u64, // only reachable through the methods below
}

impl BankAccount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` and returns `true`, or ignores a zero deposit.
    pub fn deposit(&mut self, amount: u64) -> bool {
        if amount == 0 {
            return false;
        }
        self.balance = self.balance.saturating_add(amount);
        true
    }

    /// Fails without touching the balance when funds are short.
    pub fn withdraw(&mut self, amount: u64) -> Result<u64, InsufficientFunds> {
        if amount > self.balance {
            return Err(InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("insufficient funds: requested {requested}, available {available}")]
pub struct InsufficientFunds {
    pub requested: u64,
    pub available: u64,
}

pub fn demo() -> Transcript {
    let mut acc = BankAccount::new();
    acc.deposit(1000);
    // acc.balance = 9999; // Error: field `balance` is private
    let mut lines = vec![format!("Balance: {}", acc.balance())];
    match acc.withdraw(5000) {
        Ok(left) => lines.push(format!("Withdrew 5000, left: {left}")),
        Err(err) => lines.push(format!("Rejected: {err}")),
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit() {
        let mut acc = BankAccount::new();
        assert!(acc.deposit(1000));
        assert!(!acc.deposit(0));
        assert_eq!(acc.balance(), 1000);
    }

    #[test]
    fn test_withdraw_keeps_balance_on_failure() {
        let mut acc = BankAccount::new();
        acc.deposit(100);
        assert_eq!(
            acc.withdraw(150),
            Err(InsufficientFunds {
                requested: 150,
                available: 100
            })
        );
        assert_eq!(acc.withdraw(40), Ok(60));
        assert_eq!(acc.balance(), 60);
    }

    #[test]
    fn test_demo() {
        let lines = demo();
        assert_eq!(lines[0], "Balance: 1000");
        assert!(lines[1].starts_with("Rejected: insufficient funds"));
    }
}
