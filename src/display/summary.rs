//! Expense and split summary formatting
//!
//! Pure formatting helpers returning `String`s; callers decide where the
//! output goes.

use crate::models::Expense;
use crate::services::SplitSummary;

/// Format an amount with the currency symbol and two decimal places
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Confirmation line for a newly added expense
pub fn added_expense(expense: &Expense) -> String {
    format!(
        "Added expense: {} - {}",
        expense.description(),
        format_amount(expense.amount())
    )
}

/// Broadcast message sent to participants when an expense is added
pub fn expense_notification(expense: &Expense) -> String {
    format!(
        "New expense added: {} - {}",
        expense.description(),
        format_amount(expense.amount())
    )
}

/// Total / per-share block printed by the split operation
pub fn split_summary(summary: &SplitSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total Expense: {}\n", format_amount(summary.total)));
    output.push_str(&format!(
        "Each participant owes: {}\n",
        format_amount(summary.share)
    ));
    output
}
