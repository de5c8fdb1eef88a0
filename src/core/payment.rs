//! Mock payment processors
//!
//! Both backends accept every request. They only describe what a real
//! backend would do, so the payment flow can be exercised end to end.

use crate::core::finance::money;
use crate::core::traits::PaymentProcessor;
use crate::types::{PaymentMethod, PaymentOutcome, PaymentRequest};
use rust_decimal::Decimal;

/// Processes payments against a credit card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCardProcessor {
    pub card_number: String,
}

impl CreditCardProcessor {
    pub fn new(card_number: impl Into<String>) -> Self {
        CreditCardProcessor {
            card_number: card_number.into(),
        }
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn authorize(&self, amount: Decimal, notices: &mut Vec<String>) -> bool {
        notices.push(format!(
            "Authorizing ${:.2} with credit card {}",
            money(amount), self.card_number
        ));
        true
    }

    fn capture(&self, amount: Decimal, notices: &mut Vec<String>) -> bool {
        notices.push(format!(
            "Capturing ${:.2} from credit card {}",
            money(amount), self.card_number
        ));
        true
    }

    fn refund(&self, amount: Decimal, notices: &mut Vec<String>) -> bool {
        notices.push(format!(
            "Refunding ${:.2} to credit card {}",
            money(amount), self.card_number
        ));
        true
    }
}

/// Processes payments as a transfer from a bank account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankTransferProcessor {
    pub bank_account: String,
}

impl BankTransferProcessor {
    pub fn new(bank_account: impl Into<String>) -> Self {
        BankTransferProcessor {
            bank_account: bank_account.into(),
        }
    }
}

impl PaymentProcessor for BankTransferProcessor {
    fn authorize(&self, amount: Decimal, notices: &mut Vec<String>) -> bool {
        notices.push(format!(
            "Authorizing ${:.2} with bank account {}",
            money(amount), self.bank_account
        ));
        true
    }

    fn capture(&self, amount: Decimal, notices: &mut Vec<String>) -> bool {
        notices.push(format!(
            "Capturing ${:.2} from bank account {}",
            money(amount), self.bank_account
        ));
        true
    }

    fn refund(&self, amount: Decimal, notices: &mut Vec<String>) -> bool {
        notices.push(format!(
            "Refunding ${:.2} to bank account {}",
            money(amount), self.bank_account
        ));
        true
    }
}

impl PaymentRequest {
    /// Build the processor that handles this request's method
    pub fn processor(&self) -> Box<dyn PaymentProcessor> {
        match self.method {
            PaymentMethod::CreditCard => Box::new(CreditCardProcessor::new(&self.identifier)),
            PaymentMethod::BankTransfer => Box::new(BankTransferProcessor::new(&self.identifier)),
        }
    }
}

/// Run one authorize → capture sequence
///
/// Capture only happens after a successful authorization. The final line in
/// `notices` reports the outcome.
pub fn process_payment(
    processor: &dyn PaymentProcessor,
    amount: Decimal,
    notices: &mut Vec<String>,
) -> PaymentOutcome {
    if processor.authorize(amount, notices) {
        processor.capture(amount, notices);
        notices.push("Payment processed successfully.".to_string());
        PaymentOutcome::Processed
    } else {
        notices.push("Payment authorization failed.".to_string());
        PaymentOutcome::AuthorizationFailed
    }
}
