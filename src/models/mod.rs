//! Core data models for QuickSplit
//!
//! This module contains the data structures that represent the expense-splitting
//! domain: expenses, the expense group, participants, and workflow phases.

pub mod expense;
pub mod participant;
pub mod phase;

pub use expense::{Expense, ExpenseGroup};
pub use participant::{Notify, Participant};
pub use phase::Phase;
