//! QuickSplit - console shared-expense splitter
//!
//! This library provides the core functionality for QuickSplit: track a shared
//! list of expenses among a fixed set of participants, notify every participant
//! when an expense is added, and split the total cost evenly. Everything lives
//! in memory for a single run; there is no persistence and no networking.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, participants, phases)
//! - `services`: Business logic layer (the expense manager)
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use quicksplit::services::ExpenseManager;
//!
//! let mut manager = ExpenseManager::new();
//! manager.register_participant("Laxmikant");
//! manager.register_participant("Mayank");
//! manager.add_expense("Dinner", 500.0)?;
//! let summary = manager.review_and_split()?;
//! assert_eq!(summary.share, 250.0);
//! # Ok::<(), quicksplit::SplitError>(())
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::SplitError;
