//! Workflow phases
//!
//! Display-only labels for the current step of the split workflow. Any phase
//! may be set at any time; nothing enforces the Adding -> Reviewing -> Settled
//! progression.

use std::fmt;

/// The current step of the expense workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Expenses are being collected
    #[default]
    Adding,
    /// A new expense landed and the split is being reviewed
    Reviewing,
    /// The split has been computed
    Settled,
}

impl Phase {
    /// The informational message printed when this phase is entered
    pub const fn message(&self) -> &'static str {
        match self {
            Phase::Adding => "Currently adding an expense...",
            Phase::Reviewing => "Reviewing and adjusting expense splits...",
            Phase::Settled => "Expenses settled.",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Adding => "Adding",
            Phase::Reviewing => "Reviewing",
            Phase::Settled => "Settled",
        };
        write!(f, "{}", label)
    }
}
