//! Menu numbering
//!
//! Two numberings exist. `extended` offers loan borrowing and keeps the
//! customer at the menu between operations; `classic` has no loan borrowing
//! and sends the customer back to the account-number prompt.

use crate::cli::MenuLayout;

/// Operation selected at the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Deposit,
    Withdraw,
    TaxCalculator,
    LoanQuote,
    LoanBorrow,
    Payment,
    CheckBalance,
    Exit,
}

const EXTENDED_PROMPT: &str = "Select option 1 for deposit, 2 for withdraw, 3 for filling tax, \
     4 for loan interest checking, 5 for loan borrowing, 6 for payment processing, \
     7 for checking balance, or 0 to exit: ";

const CLASSIC_PROMPT: &str = "Select option 1 for deposit, 2 for withdraw, 3 for filling tax, \
     4 for loan interest checking, 5 for payment processing, 6 for checking balance, \
     or 0 to exit: ";

impl MenuLayout {
    /// Map a numeric menu choice to an action
    ///
    /// Returns `None` for choices the layout does not offer.
    pub fn action(self, choice: i64) -> Option<MenuAction> {
        let action = match (self, choice) {
            (_, 0) => MenuAction::Exit,
            (_, 1) => MenuAction::Deposit,
            (_, 2) => MenuAction::Withdraw,
            (_, 3) => MenuAction::TaxCalculator,
            (_, 4) => MenuAction::LoanQuote,
            (MenuLayout::Extended, 5) => MenuAction::LoanBorrow,
            (MenuLayout::Extended, 6) => MenuAction::Payment,
            (MenuLayout::Extended, 7) => MenuAction::CheckBalance,
            (MenuLayout::Classic, 5) => MenuAction::Payment,
            (MenuLayout::Classic, 6) => MenuAction::CheckBalance,
            _ => return None,
        };
        Some(action)
    }

    /// Text shown when asking for a menu choice
    pub fn prompt(self) -> &'static str {
        match self {
            MenuLayout::Extended => EXTENDED_PROMPT,
            MenuLayout::Classic => CLASSIC_PROMPT,
        }
    }

    /// Whether finished or aborted operations return to the menu
    /// (otherwise to the account-number prompt)
    pub fn resumes_at_menu(self) -> bool {
        matches!(self, MenuLayout::Extended)
    }
}
