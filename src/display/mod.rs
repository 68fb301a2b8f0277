//! Terminal display formatting

pub mod summary;

pub use summary::{added_expense, expense_notification, format_amount, split_summary};
