//! Expense types
//!
//! An [`Expense`] is a named, strictly positive amount. Expenses are immutable
//! once created and are collected into an [`ExpenseGroup`], which maintains
//! insertion order and knows its running total and combined description.

use crate::error::{SplitError, SplitResult};

/// A single shared expense
///
/// Immutable after construction; the constructor rejects non-positive amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    description: String,
    amount: f64,
}

impl Expense {
    /// Create a new expense
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidAmount`] if `amount` is zero, negative,
    /// or NaN.
    pub fn new(description: impl Into<String>, amount: f64) -> SplitResult<Self> {
        if amount <= 0.0 || amount.is_nan() {
            return Err(SplitError::InvalidAmount(amount));
        }
        Ok(Self {
            description: description.into(),
            amount,
        })
    }

    /// The expense description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The expense amount
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// An ordered collection of expenses
///
/// Invariant: `total()` always equals the sum of member amounts.
#[derive(Debug, Default)]
pub struct ExpenseGroup {
    expenses: Vec<Expense>,
}

impl ExpenseGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense to the group
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Sum of all member amounts (0.0 for an empty group)
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Member descriptions joined with `", "`, no trailing separator
    pub fn describe(&self) -> String {
        self.expenses
            .iter()
            .map(Expense::description)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of expenses in the group
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the group holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }
}
