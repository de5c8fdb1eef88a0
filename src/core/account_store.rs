//! Account store module
//!
//! This module provides the `AccountStore` struct which maps account numbers
//! to accounts and performs every balance-changing operation.
//!
//! The AccountStore is responsible for:
//! - Looking up the account a customer selects at the console
//! - Deposits, withdrawals and loans with their business rules
//! - Balance queries
//!
//! Every failing operation leaves the account untouched.

use crate::core::finance::loan_interest;
use crate::types::{Account, AccountNumber, BankError, LoanReceipt};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Holds every account known to the session
///
/// A normal run seeds exactly one account, but lookups always go through the
/// map so an unknown number is handled the same way regardless of how many
/// accounts exist.
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    /// Map of account numbers to accounts
    accounts: HashMap<AccountNumber, Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: HashMap::new(),
        }
    }

    /// Create a store seeded with a single account
    pub fn with_account(account: Account) -> Self {
        let mut store = AccountStore::new();
        store.insert(account);
        store
    }

    /// Add an account, replacing any account with the same number
    pub fn insert(&mut self, account: Account) {
        self.accounts.insert(account.number, account);
    }

    /// Look up an account
    pub fn get(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Resolve an account number entered at the console
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this number.
    pub fn find(&self, number: AccountNumber) -> Result<&Account, BankError> {
        self.get(number)
            .ok_or_else(|| BankError::account_not_found(number))
    }

    fn find_mut(&mut self, number: AccountNumber) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(&number)
            .ok_or_else(|| BankError::account_not_found(number))
    }

    /// Current balance of an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this number.
    pub fn balance(&self, number: AccountNumber) -> Result<Decimal, BankError> {
        self.find(number).map(|account| account.balance)
    }

    /// Deposit funds into an account
    ///
    /// # Arguments
    ///
    /// * `number` - The account to credit
    /// * `amount` - The amount to deposit (must be positive)
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance
    /// * `Err(BankError)` - If the deposit was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The account does not exist
    /// - Adding the amount would overflow the balance
    pub fn deposit(&mut self, number: AccountNumber, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let account = self.find_mut(number)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit"))?;

        Ok(account.balance)
    }

    /// Withdraw funds from an account
    ///
    /// # Arguments
    ///
    /// * `number` - The account to debit
    /// * `amount` - The amount to withdraw (must be positive and covered by the balance)
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance
    /// * `Err(BankError)` - If the withdrawal was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The amount exceeds the current balance
    /// - The account does not exist
    pub fn withdraw(&mut self, number: AccountNumber, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let account = self.find_mut(number)?;
        if amount > account.balance {
            return Err(BankError::insufficient_funds(account.balance, amount));
        }

        account.balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal"))?;

        Ok(account.balance)
    }

    /// Credit a loan to an account and compute what it will cost
    ///
    /// The principal is added to the balance; interest is computed with
    /// [`loan_interest`] and reported, not charged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The principal is zero or negative
    /// - The account does not exist
    /// - The interest or the new balance would overflow
    pub fn add_loan(
        &mut self,
        number: AccountNumber,
        principal: i64,
        years: i64,
        borrowing_rate: i64,
    ) -> Result<LoanReceipt, BankError> {
        if principal <= 0 {
            return Err(BankError::invalid_loan_amount(principal));
        }

        let interest = loan_interest(principal, years, borrowing_rate)?;
        let total_payback = principal
            .checked_add(interest)
            .map(Decimal::from)
            .ok_or_else(|| BankError::arithmetic_overflow("loan payback"))?;

        let account = self.find_mut(number)?;
        let new_balance = account
            .balance
            .checked_add(Decimal::from(principal))
            .ok_or_else(|| BankError::arithmetic_overflow("loan"))?;
        account.balance = new_balance;

        Ok(LoanReceipt {
            account: number,
            principal,
            interest,
            total_payback,
            new_balance,
        })
    }
}
