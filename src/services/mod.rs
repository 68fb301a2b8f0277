//! Business logic layer
//!
//! Services own the domain state and expose the operations the CLI drives.

pub mod manager;

pub use manager::{ExpenseManager, SplitSummary};
