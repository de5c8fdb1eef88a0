//! Interactive session state machine
//!
//! A session moves through explicit states:
//!
//! ```text
//! AwaitAccountNumber -> AwaitMenuChoice -> (operation prompts) -> AwaitContinue
//!        ^                     ^                                      |
//!        +---------------------+------------- yes --------------------+
//!                                                                     |
//!                                         Finished <---- no / exit ---+
//! ```
//!
//! [`Session::step`] consumes one line of input (or `None` once input is
//! closed), moves to the next state, and returns the [`Effect`]s to carry
//! out. No I/O happens here; the [`runner`](crate::session::runner) prints
//! and logs the effects.

use crate::core::{final_amount_and_tax, loan_interest, money, process_payment, AccountStore};
use crate::io::input::{parse_decimal, parse_integer, parse_token};
use crate::session::menu::MenuAction;
use crate::session::SessionConfig;
use crate::types::{AccountNumber, BankError, PaymentMethod, PaymentRequest};
use log::debug;
use rust_decimal::Decimal;

const INVALID_INPUT: &str = "Invalid input. Please try again.";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const INVALID_PAYMENT_METHOD: &str = "Invalid payment method.";
const EXITING: &str = "Exiting...";
const ASSUMING_NO: &str = "Error reading response. Assuming 'no'.";

/// Output of a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// One line of console output
    Say(String),

    /// One audit log entry
    Log(String),
}

/// Balance-changing operation waiting for its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOperation {
    Deposit,
    Withdraw,
}

/// Loan option waiting for its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanOperation {
    /// Quote the interest only
    Quote,
    /// Credit the principal to the account
    Borrow,
}

/// Where the session is waiting for input
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    AwaitAccountNumber,
    AwaitMenuChoice {
        account: AccountNumber,
    },
    AwaitAmount {
        account: AccountNumber,
        operation: BalanceOperation,
    },
    AwaitTaxInitial {
        account: AccountNumber,
    },
    AwaitTaxRate {
        account: AccountNumber,
        initial: Decimal,
    },
    AwaitLoanPrincipal {
        account: AccountNumber,
        operation: LoanOperation,
    },
    AwaitLoanYears {
        account: AccountNumber,
        operation: LoanOperation,
        principal: i64,
    },
    AwaitPaymentMethod {
        account: AccountNumber,
    },
    AwaitPaymentIdentifier {
        account: AccountNumber,
        method: PaymentMethod,
    },
    AwaitPaymentAmount {
        account: AccountNumber,
        method: PaymentMethod,
        identifier: String,
    },
    AwaitContinue {
        account: AccountNumber,
    },
    /// Terminal state; no further input is read
    Finished,
}

/// One customer session over an account store
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    store: AccountStore,
    state: State,
}

impl Session {
    /// Start a session at the account-number prompt
    pub fn new(config: SessionConfig, store: AccountStore) -> Self {
        Session {
            config,
            store,
            state: State::AwaitAccountNumber,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Text to show before reading the next line, `None` once finished
    pub fn prompt(&self) -> Option<&'static str> {
        let prompt = match &self.state {
            State::AwaitAccountNumber => "Enter your account number: ",
            State::AwaitMenuChoice { .. } => self.config.layout.prompt(),
            State::AwaitAmount {
                operation: BalanceOperation::Deposit,
                ..
            } => "Enter the amount you want to deposit: ",
            State::AwaitAmount {
                operation: BalanceOperation::Withdraw,
                ..
            } => "Enter the amount you want to withdraw: ",
            State::AwaitTaxInitial { .. } => "Enter the initial amount: ",
            State::AwaitTaxRate { .. } => "Enter the interest rate: ",
            State::AwaitLoanPrincipal {
                operation: LoanOperation::Quote,
                ..
            } => "Enter the amount you want to borrow: ",
            State::AwaitLoanPrincipal {
                operation: LoanOperation::Borrow,
                ..
            } => "Enter loan amount: ",
            State::AwaitLoanYears { .. } => "Enter the number of years you are borrowing for: ",
            State::AwaitPaymentMethod { .. } => {
                "Select payment method: 1 for Credit Card, 2 for Bank Transfer: "
            }
            State::AwaitPaymentIdentifier {
                method: PaymentMethod::CreditCard,
                ..
            } => "Enter credit card number: ",
            State::AwaitPaymentIdentifier {
                method: PaymentMethod::BankTransfer,
                ..
            } => "Enter bank account number: ",
            State::AwaitPaymentAmount {
                method: PaymentMethod::CreditCard,
                ..
            } => "Enter amount to process with credit card: ",
            State::AwaitPaymentAmount {
                method: PaymentMethod::BankTransfer,
                ..
            } => "Enter amount to process with bank transfer: ",
            State::AwaitContinue { .. } => "Do you want to continue? (yes/no): ",
            State::Finished => return None,
        };
        Some(prompt)
    }

    /// Feed one line of input (`None` when input is closed or unreadable)
    ///
    /// # Returns
    ///
    /// The console lines and log entries produced by this step, in order.
    pub fn step(&mut self, input: Option<&str>) -> Vec<Effect> {
        let state = std::mem::replace(&mut self.state, State::Finished);
        let mut effects = Vec::new();

        let next = match input {
            Some(line) => self.transition(state.clone(), line, &mut effects),
            None => close(&state, &mut effects),
        };

        debug!("session: {:?} -> {:?}", state, next);
        self.state = next;
        effects
    }

    fn transition(&mut self, state: State, line: &str, effects: &mut Vec<Effect>) -> State {
        match state {
            State::AwaitAccountNumber => self.select_account(line, effects),
            State::AwaitMenuChoice { account } => self.choose(account, line, effects),
            State::AwaitAmount { account, operation } => {
                self.apply_amount(account, operation, line, effects)
            }
            State::AwaitTaxInitial { account } => match parse_decimal("initial amount", line) {
                Ok(initial) => State::AwaitTaxRate { account, initial },
                Err(e) => self.abort(account, e, effects),
            },
            State::AwaitTaxRate { account, initial } => {
                self.calculate_tax(account, initial, line, effects)
            }
            State::AwaitLoanPrincipal { account, operation } => {
                let field = match operation {
                    LoanOperation::Quote => "principal amount",
                    LoanOperation::Borrow => "loan amount",
                };
                match parse_integer(field, line) {
                    Ok(principal) => State::AwaitLoanYears {
                        account,
                        operation,
                        principal,
                    },
                    Err(e) => self.abort(account, e, effects),
                }
            }
            State::AwaitLoanYears {
                account,
                operation,
                principal,
            } => self.apply_loan(account, operation, principal, line, effects),
            State::AwaitPaymentMethod { account } => match parse_integer("payment method", line) {
                Ok(choice) => match PaymentMethod::from_choice(choice) {
                    Some(method) => State::AwaitPaymentIdentifier { account, method },
                    None => {
                        say(effects, INVALID_PAYMENT_METHOD);
                        State::AwaitContinue { account }
                    }
                },
                Err(e) => self.abort(account, e, effects),
            },
            State::AwaitPaymentIdentifier { account, method } => {
                let field = match method {
                    PaymentMethod::CreditCard => "credit card number",
                    PaymentMethod::BankTransfer => "bank account number",
                };
                match parse_token(field, line) {
                    Ok(identifier) => State::AwaitPaymentAmount {
                        account,
                        method,
                        identifier,
                    },
                    Err(e) => self.abort(account, e, effects),
                }
            }
            State::AwaitPaymentAmount {
                account,
                method,
                identifier,
            } => self.pay(account, method, identifier, line, effects),
            State::AwaitContinue { account } => {
                let answer = line.trim().to_lowercase();
                match answer.as_str() {
                    "yes" | "y" => self.resume(account),
                    "" => {
                        say(effects, ASSUMING_NO);
                        finish(effects)
                    }
                    _ => finish(effects),
                }
            }
            State::Finished => State::Finished,
        }
    }

    fn select_account(&self, line: &str, effects: &mut Vec<Effect>) -> State {
        let number = match parse_integer("account number", line) {
            Ok(number) => number,
            Err(e) => {
                report_input_error(e, effects);
                return State::AwaitAccountNumber;
            }
        };

        match self.store.find(number) {
            Ok(_) => State::AwaitMenuChoice { account: number },
            Err(e) => {
                say(effects, e.to_string());
                audit(effects, format!("Account number {} not found", number));
                State::AwaitAccountNumber
            }
        }
    }

    fn choose(&self, account: AccountNumber, line: &str, effects: &mut Vec<Effect>) -> State {
        let choice = match parse_integer("option", line) {
            Ok(choice) => choice,
            Err(e) => {
                report_input_error(e, effects);
                return State::AwaitMenuChoice { account };
            }
        };

        match self.config.layout.action(choice) {
            Some(MenuAction::Deposit) => State::AwaitAmount {
                account,
                operation: BalanceOperation::Deposit,
            },
            Some(MenuAction::Withdraw) => State::AwaitAmount {
                account,
                operation: BalanceOperation::Withdraw,
            },
            Some(MenuAction::TaxCalculator) => State::AwaitTaxInitial { account },
            Some(MenuAction::LoanQuote) => State::AwaitLoanPrincipal {
                account,
                operation: LoanOperation::Quote,
            },
            Some(MenuAction::LoanBorrow) => State::AwaitLoanPrincipal {
                account,
                operation: LoanOperation::Borrow,
            },
            Some(MenuAction::Payment) => State::AwaitPaymentMethod { account },
            Some(MenuAction::CheckBalance) => {
                match self.store.balance(account) {
                    Ok(balance) => say(
                        effects,
                        format!("Your current balance is {:.2}.", money(balance)),
                    ),
                    Err(e) => say(effects, e.to_string()),
                }
                State::AwaitContinue { account }
            }
            Some(MenuAction::Exit) => finish(effects),
            None => {
                say(effects, INVALID_CHOICE);
                State::AwaitContinue { account }
            }
        }
    }

    fn apply_amount(
        &mut self,
        account: AccountNumber,
        operation: BalanceOperation,
        line: &str,
        effects: &mut Vec<Effect>,
    ) -> State {
        let field = match operation {
            BalanceOperation::Deposit => "deposit amount",
            BalanceOperation::Withdraw => "withdrawal amount",
        };
        let amount = match parse_decimal(field, line) {
            Ok(amount) => amount,
            Err(e) => return self.abort(account, e, effects),
        };

        match operation {
            BalanceOperation::Deposit => match self.store.deposit(account, amount) {
                Ok(balance) => {
                    say(
                        effects,
                        format!(
                            "You just deposited {:.2} into your account. Your new balance is {:.2}.",
                            money(amount),
                            money(balance)
                        ),
                    );
                    audit(
                        effects,
                        format!(
                            "Deposit of {:.2} made. New balance: {:.2}",
                            money(amount),
                            money(balance)
                        ),
                    );
                }
                Err(e) => say(effects, e.to_string()),
            },
            BalanceOperation::Withdraw => match self.store.withdraw(account, amount) {
                Ok(balance) => {
                    say(
                        effects,
                        format!(
                            "You just withdrew {:.2} from your account. Your new balance is {:.2}.",
                            money(amount),
                            money(balance)
                        ),
                    );
                    audit(
                        effects,
                        format!(
                            "Withdrawal of {:.2} made. New balance: {:.2}",
                            money(amount),
                            money(balance)
                        ),
                    );
                }
                Err(e) => say(effects, e.to_string()),
            },
        }

        State::AwaitContinue { account }
    }

    fn calculate_tax(
        &self,
        account: AccountNumber,
        initial: Decimal,
        line: &str,
        effects: &mut Vec<Effect>,
    ) -> State {
        let rate = match parse_decimal("interest rate", line) {
            Ok(rate) => rate,
            Err(e) => return self.abort(account, e, effects),
        };

        match final_amount_and_tax(initial, rate) {
            Ok(breakdown) => {
                say(
                    effects,
                    format!(
                        "The final amount is {:.2} and the tax is {:.2}",
                        money(breakdown.final_amount),
                        money(breakdown.tax)
                    ),
                );
                audit(
                    effects,
                    format!(
                        "Tax calculated for {:.2} at rate {}: final {:.2}, tax {:.2}",
                        money(initial),
                        rate,
                        money(breakdown.final_amount),
                        money(breakdown.tax)
                    ),
                );
            }
            Err(e) => say(effects, e.to_string()),
        }

        State::AwaitContinue { account }
    }

    fn apply_loan(
        &mut self,
        account: AccountNumber,
        operation: LoanOperation,
        principal: i64,
        line: &str,
        effects: &mut Vec<Effect>,
    ) -> State {
        let field = match operation {
            LoanOperation::Quote => "time",
            LoanOperation::Borrow => "loan time",
        };
        let years = match parse_integer(field, line) {
            Ok(years) => years,
            Err(e) => return self.abort(account, e, effects),
        };
        let rate = self.config.borrowing_rate;

        match operation {
            LoanOperation::Quote => match loan_interest(principal, years, rate) {
                Ok(interest) => {
                    say(
                        effects,
                        format!(
                            "if you borrow {} you will pay a total of {} in interest in {} year/s.",
                            principal, interest, years
                        ),
                    );
                    audit(
                        effects,
                        format!(
                            "Loan interest quoted for {} over {} year/s: {}",
                            principal, years, interest
                        ),
                    );
                }
                Err(e) => say(effects, e.to_string()),
            },
            LoanOperation::Borrow => match self.store.add_loan(account, principal, years, rate) {
                Ok(receipt) => {
                    say(
                        effects,
                        format!(
                            "You have borrowed {}. You will pay back a total of {:.2} in interest.",
                            receipt.principal,
                            money(receipt.total_payback)
                        ),
                    );
                    say(
                        effects,
                        format!("Your new balance is {:.2}.", money(receipt.new_balance)),
                    );
                    audit(
                        effects,
                        format!(
                            "Loan of {} added. New balance: {:.2}",
                            receipt.principal,
                            money(receipt.new_balance)
                        ),
                    );
                }
                Err(e) => say(effects, e.to_string()),
            },
        }

        State::AwaitContinue { account }
    }

    fn pay(
        &self,
        account: AccountNumber,
        method: PaymentMethod,
        identifier: String,
        line: &str,
        effects: &mut Vec<Effect>,
    ) -> State {
        let field = match method {
            PaymentMethod::CreditCard => "credit card amount",
            PaymentMethod::BankTransfer => "bank transfer amount",
        };
        let amount = match parse_decimal(field, line) {
            Ok(amount) => amount,
            Err(e) => return self.abort(account, e, effects),
        };

        let request = PaymentRequest {
            amount,
            method,
            identifier,
        };
        let mut notices = Vec::new();
        let outcome = process_payment(request.processor().as_ref(), request.amount, &mut notices);

        effects.extend(notices.into_iter().map(Effect::Say));
        audit(
            effects,
            format!(
                "Payment of {:.2} via {} {}: {}",
                money(request.amount),
                request.method,
                request.identifier,
                outcome
            ),
        );

        State::AwaitContinue { account }
    }

    /// State to return to after continuing or abandoning an operation
    fn resume(&self, account: AccountNumber) -> State {
        if self.config.layout.resumes_at_menu() {
            State::AwaitMenuChoice { account }
        } else {
            State::AwaitAccountNumber
        }
    }

    /// Abandon the current operation after an unparsable line
    fn abort(&self, account: AccountNumber, error: BankError, effects: &mut Vec<Effect>) -> State {
        report_input_error(error, effects);
        self.resume(account)
    }
}

fn say(effects: &mut Vec<Effect>, text: impl Into<String>) {
    effects.push(Effect::Say(text.into()));
}

fn audit(effects: &mut Vec<Effect>, text: impl Into<String>) {
    effects.push(Effect::Log(text.into()));
}

fn report_input_error(error: BankError, effects: &mut Vec<Effect>) {
    audit(effects, format!("Error reading input: {}", error));
    say(effects, INVALID_INPUT);
}

fn finish(effects: &mut Vec<Effect>) -> State {
    say(effects, EXITING);
    audit(effects, EXITING);
    State::Finished
}

/// Input ended while waiting in `state`
fn close(state: &State, effects: &mut Vec<Effect>) -> State {
    match state {
        State::Finished => {}
        State::AwaitContinue { .. } => {
            say(effects, ASSUMING_NO);
            finish(effects);
        }
        _ => audit(effects, "Input closed, ending session"),
    }
    State::Finished
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::MenuLayout;
    use crate::types::Account;
    use rstest::{fixture, rstest};

    fn session_with(layout: MenuLayout, borrowing_rate: i64) -> Session {
        let store = AccountStore::with_account(Account::new(1, "Users", Decimal::new(2000, 0)));
        Session::new(
            SessionConfig {
                borrowing_rate,
                layout,
            },
            store,
        )
    }

    #[fixture]
    fn session() -> Session {
        session_with(MenuLayout::Extended, 50)
    }

    /// Feed lines and collect every console line produced
    fn drive(session: &mut Session, lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|line| session.step(Some(*line)))
            .filter_map(|effect| match effect {
                Effect::Say(text) => Some(text),
                Effect::Log(_) => None,
            })
            .collect()
    }

    fn balance(session: &Session) -> Decimal {
        session.store().balance(1).unwrap()
    }

    #[rstest]
    fn test_starts_at_account_prompt(session: Session) {
        assert_eq!(session.state(), &State::AwaitAccountNumber);
        assert_eq!(session.prompt(), Some("Enter your account number: "));
    }

    #[rstest]
    fn test_unknown_account_retries(mut session: Session) {
        let effects = session.step(Some("7"));

        assert_eq!(
            effects,
            vec![
                Effect::Say("Account not found in our system.".to_string()),
                Effect::Log("Account number 7 not found".to_string()),
            ]
        );
        assert_eq!(session.state(), &State::AwaitAccountNumber);
        assert_eq!(balance(&session), Decimal::new(2000, 0));
    }

    #[rstest]
    fn test_unparsable_account_number_retries(mut session: Session) {
        let effects = session.step(Some("abc"));

        assert_eq!(
            effects,
            vec![
                Effect::Log("Error reading input: expected account number, got 'abc'".to_string()),
                Effect::Say("Invalid input. Please try again.".to_string()),
            ]
        );
        assert_eq!(session.state(), &State::AwaitAccountNumber);
    }

    #[rstest]
    fn test_known_account_opens_menu(mut session: Session) {
        assert!(session.step(Some("1")).is_empty());
        assert_eq!(session.state(), &State::AwaitMenuChoice { account: 1 });
        assert_eq!(session.prompt(), Some(MenuLayout::Extended.prompt()));
    }

    #[rstest]
    fn test_unparsable_menu_choice_retries_menu(mut session: Session) {
        let output = drive(&mut session, &["1", "x"]);

        assert_eq!(output, vec!["Invalid input. Please try again."]);
        assert_eq!(session.state(), &State::AwaitMenuChoice { account: 1 });
    }

    #[rstest]
    fn test_deposit(mut session: Session) {
        let effects: Vec<Effect> = ["1", "1", "500"]
            .iter()
            .flat_map(|line| session.step(Some(*line)))
            .collect();

        assert_eq!(
            effects,
            vec![
                Effect::Say(
                    "You just deposited 500.00 into your account. Your new balance is 2500.00."
                        .to_string()
                ),
                Effect::Log("Deposit of 500.00 made. New balance: 2500.00".to_string()),
            ]
        );
        assert_eq!(balance(&session), Decimal::new(2500, 0));
        assert_eq!(session.state(), &State::AwaitContinue { account: 1 });
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-20")]
    fn test_deposit_invalid_amount_is_not_logged(mut session: Session, #[case] amount: &str) {
        let effects: Vec<Effect> = ["1", "1", amount]
            .iter()
            .flat_map(|line| session.step(Some(*line)))
            .collect();

        assert_eq!(
            effects,
            vec![Effect::Say("You have inputted an invalid amount.".to_string())]
        );
        assert_eq!(balance(&session), Decimal::new(2000, 0));
    }

    #[rstest]
    fn test_withdraw_insufficient_funds(mut session: Session) {
        let output = drive(&mut session, &["1", "2", "3000"]);

        assert_eq!(output, vec!["Insufficient funds."]);
        assert_eq!(balance(&session), Decimal::new(2000, 0));
    }

    #[rstest]
    fn test_withdraw(mut session: Session) {
        let output = drive(&mut session, &["1", "2", "1000"]);

        assert_eq!(
            output,
            vec!["You just withdrew 1000.00 from your account. Your new balance is 1000.00."]
        );
        assert_eq!(balance(&session), Decimal::new(1000, 0));
    }

    #[rstest]
    fn test_unparsable_amount_aborts_to_menu(mut session: Session) {
        let output = drive(&mut session, &["1", "1", "five"]);

        assert_eq!(output, vec!["Invalid input. Please try again."]);
        assert_eq!(session.state(), &State::AwaitMenuChoice { account: 1 });
        assert_eq!(balance(&session), Decimal::new(2000, 0));
    }

    #[test]
    fn test_unparsable_amount_aborts_to_account_prompt_in_classic() {
        let mut session = session_with(MenuLayout::Classic, 7);
        let output = drive(&mut session, &["1", "1", "five"]);

        assert_eq!(output, vec!["Invalid input. Please try again."]);
        assert_eq!(session.state(), &State::AwaitAccountNumber);
    }

    #[rstest]
    fn test_tax_calculator(mut session: Session) {
        let output = drive(&mut session, &["1", "3", "1000", "0.1"]);

        assert_eq!(output, vec!["The final amount is 1100.00 and the tax is 55.00"]);
        assert_eq!(balance(&session), Decimal::new(2000, 0));
    }

    #[rstest]
    #[case::extended(MenuLayout::Extended, 50, "if you borrow 100 you will pay a total of 10100 in interest in 2 year/s.")]
    #[case::classic(MenuLayout::Classic, 7, "if you borrow 100 you will pay a total of 1500 in interest in 2 year/s.")]
    fn test_loan_quote(#[case] layout: MenuLayout, #[case] rate: i64, #[case] expected: &str) {
        let mut session = session_with(layout, rate);
        let output = drive(&mut session, &["1", "4", "100", "2"]);

        assert_eq!(output, vec![expected]);
        assert_eq!(balance(&session), Decimal::new(2000, 0));
    }

    #[rstest]
    fn test_loan_borrow(mut session: Session) {
        let output = drive(&mut session, &["1", "5", "100", "2"]);

        assert_eq!(
            output,
            vec![
                "You have borrowed 100. You will pay back a total of 10200.00 in interest.",
                "Your new balance is 2100.00.",
            ]
        );
        assert_eq!(balance(&session), Decimal::new(2100, 0));
    }

    #[rstest]
    fn test_loan_borrow_invalid_principal(mut session: Session) {
        let output = drive(&mut session, &["1", "5", "0", "2"]);

        assert_eq!(output, vec!["You have inputted an invalid loan amount."]);
        assert_eq!(balance(&session), Decimal::new(2000, 0));
    }

    #[rstest]
    #[case::credit_card(
        "1",
        "4111",
        vec![
            "Authorizing $20.00 with credit card 4111",
            "Capturing $20.00 from credit card 4111",
            "Payment processed successfully.",
        ]
    )]
    #[case::bank_transfer(
        "2",
        "DE89",
        vec![
            "Authorizing $20.00 with bank account DE89",
            "Capturing $20.00 from bank account DE89",
            "Payment processed successfully.",
        ]
    )]
    fn test_payment(
        mut session: Session,
        #[case] method: &str,
        #[case] identifier: &str,
        #[case] expected: Vec<&str>,
    ) {
        let output = drive(&mut session, &["1", "6", method, identifier, "20"]);

        assert_eq!(output, expected);
        assert_eq!(session.state(), &State::AwaitContinue { account: 1 });
    }

    #[rstest]
    fn test_payment_is_logged(mut session: Session) {
        let effects: Vec<Effect> = ["1", "6", "1", "4111", "20"]
            .iter()
            .flat_map(|line| session.step(Some(*line)))
            .collect();

        assert_eq!(
            effects.last(),
            Some(&Effect::Log(
                "Payment of 20.00 via credit card 4111: processed".to_string()
            ))
        );
    }

    #[rstest]
    fn test_unknown_payment_method_goes_to_continue(mut session: Session) {
        let output = drive(&mut session, &["1", "6", "3"]);

        assert_eq!(output, vec!["Invalid payment method."]);
        assert_eq!(session.state(), &State::AwaitContinue { account: 1 });
    }

    #[rstest]
    fn test_check_balance(mut session: Session) {
        let output = drive(&mut session, &["1", "7"]);

        assert_eq!(output, vec!["Your current balance is 2000.00."]);
        assert_eq!(session.state(), &State::AwaitContinue { account: 1 });
    }

    #[rstest]
    fn test_unknown_choice_goes_to_continue(mut session: Session) {
        let output = drive(&mut session, &["1", "9"]);

        assert_eq!(output, vec!["Invalid choice. Please try again."]);
        assert_eq!(session.state(), &State::AwaitContinue { account: 1 });
    }

    #[rstest]
    fn test_exit_from_menu(mut session: Session) {
        session.step(Some("1"));
        let effects = session.step(Some("0"));

        assert_eq!(
            effects,
            vec![
                Effect::Say("Exiting...".to_string()),
                Effect::Log("Exiting...".to_string()),
            ]
        );
        assert!(session.is_finished());
        assert_eq!(session.prompt(), None);
    }

    #[rstest]
    #[case::yes("yes")]
    #[case::short("y")]
    #[case::upper(" YES ")]
    fn test_continue_returns_to_menu(mut session: Session, #[case] answer: &str) {
        drive(&mut session, &["1", "7", answer]);
        assert_eq!(session.state(), &State::AwaitMenuChoice { account: 1 });
    }

    #[test]
    fn test_continue_returns_to_account_prompt_in_classic() {
        let mut session = session_with(MenuLayout::Classic, 7);
        drive(&mut session, &["1", "6", "y"]);
        assert_eq!(session.state(), &State::AwaitAccountNumber);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn test_blank_continue_answer_assumes_no(mut session: Session, #[case] answer: &str) {
        drive(&mut session, &["1", "7"]);
        let effects = session.step(Some(answer));

        assert_eq!(
            effects,
            vec![
                Effect::Say("Error reading response. Assuming 'no'.".to_string()),
                Effect::Say("Exiting...".to_string()),
                Effect::Log("Exiting...".to_string()),
            ]
        );
        assert!(session.is_finished());
    }

    #[rstest]
    #[case::tax_rounds_up(&["1", "3", "1.15", "0"], "The final amount is 1.15 and the tax is 0.06")]
    #[case::balance_rounds_up(
        &["1", "2", "1999.991"],
        "You just withdrew 1999.99 from your account. Your new balance is 0.01."
    )]
    #[case::deposit_rounds_half_up(
        &["1", "1", "0.005"],
        "You just deposited 0.01 into your account. Your new balance is 2000.01."
    )]
    fn test_amounts_are_rounded_to_cents(
        mut session: Session,
        #[case] lines: &[&str],
        #[case] expected: &str,
    ) {
        let output = drive(&mut session, lines);
        assert_eq!(output, vec![expected]);
    }

    #[rstest]
    #[case::no("no")]
    #[case::other("maybe")]
    fn test_declining_to_continue_exits(mut session: Session, #[case] answer: &str) {
        let output = drive(&mut session, &["1", "7", answer]);

        assert_eq!(output.last().map(String::as_str), Some("Exiting..."));
        assert!(session.is_finished());
    }

    #[rstest]
    fn test_closed_input_at_continue_assumes_no(mut session: Session) {
        drive(&mut session, &["1", "7"]);
        let effects = session.step(None);

        assert_eq!(
            effects,
            vec![
                Effect::Say("Error reading response. Assuming 'no'.".to_string()),
                Effect::Say("Exiting...".to_string()),
                Effect::Log("Exiting...".to_string()),
            ]
        );
        assert!(session.is_finished());
    }

    #[rstest]
    fn test_closed_input_elsewhere_finishes(mut session: Session) {
        let effects = session.step(None);

        assert_eq!(
            effects,
            vec![Effect::Log("Input closed, ending session".to_string())]
        );
        assert!(session.is_finished());
    }

    #[rstest]
    fn test_finished_session_ignores_input(mut session: Session) {
        drive(&mut session, &["1", "0"]);

        assert!(session.step(Some("1")).is_empty());
        assert!(session.step(None).is_empty());
        assert!(session.is_finished());
    }

    #[rstest]
    fn test_scenario(mut session: Session) {
        let output = drive(
            &mut session,
            &["1", "1", "500", "y", "2", "3000", "y", "2", "1000", "y", "7"],
        );

        assert!(output[0].contains("2500.00"));
        assert_eq!(output[1], "Insufficient funds.");
        assert_eq!(output[3], "Your current balance is 1500.00.");
        assert_eq!(balance(&session), Decimal::new(1500, 0));
    }
}
