//! Expense manager service
//!
//! Ties together the expense group, the participant registry, and phase
//! tracking behind a small API: register participants, add expenses, review
//! and split. Adding an expense broadcasts a notification to every registered
//! participant in registration order.

use crate::display;
use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, ExpenseGroup, Notify, Participant, Phase};

/// Result of an even split across all registered participants
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSummary {
    /// Sum of all expense amounts
    pub total: f64,
    /// Amount each participant owes (`total / participants`, unrounded)
    pub share: f64,
    /// Number of registered participants
    pub participants: usize,
}

/// Facade over the expense group, participants, and workflow phase
///
/// One instance per program run; nothing is persisted.
pub struct ExpenseManager {
    group: ExpenseGroup,
    observers: Vec<Box<dyn Notify>>,
    phase: Phase,
}

impl ExpenseManager {
    /// Create an empty manager in the `Adding` phase
    ///
    /// Construction is silent; callers set the initial phase explicitly when
    /// they want the phase entry message printed.
    pub fn new() -> Self {
        Self {
            group: ExpenseGroup::new(),
            observers: Vec::new(),
            phase: Phase::Adding,
        }
    }

    /// Register a named participant
    ///
    /// Append-only; duplicate names are allowed and there is no removal.
    pub fn register_participant(&mut self, name: impl Into<String>) {
        self.subscribe(Box::new(Participant::new(name)));
    }

    /// Subscribe any notification target
    ///
    /// Broadcast order follows subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn Notify>) {
        self.observers.push(observer);
    }

    /// Number of registered participants
    pub fn participant_count(&self) -> usize {
        self.observers.len()
    }

    /// The current workflow phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sum of all recorded expense amounts
    pub fn total(&self) -> f64 {
        self.group.total()
    }

    /// The underlying expense group
    pub fn group(&self) -> &ExpenseGroup {
        &self.group
    }

    /// Set the current phase and print its entry message
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        println!("{}", phase.message());
    }

    /// Add an expense, notify every participant, and enter `Reviewing`
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidAmount`] for a non-positive amount; the
    /// group, participant list, and phase are left untouched.
    pub fn add_expense(&mut self, description: &str, amount: f64) -> SplitResult<()> {
        let expense = Expense::new(description, amount)?;
        let confirmation = display::added_expense(&expense);
        let notification = display::expense_notification(&expense);
        self.group.add(expense);

        println!("{}", confirmation);
        self.notify_all(&notification);
        self.set_phase(Phase::Reviewing);
        Ok(())
    }

    /// Compute the even split, print the summary, and enter `Settled`
    ///
    /// # Errors
    /// Returns [`SplitError::NoParticipants`] when nobody is registered; no
    /// division is performed and the phase is unchanged.
    pub fn review_and_split(&mut self) -> SplitResult<SplitSummary> {
        if self.observers.is_empty() {
            return Err(SplitError::NoParticipants);
        }

        let participants = self.observers.len();
        let total = self.group.total();
        let summary = SplitSummary {
            total,
            share: total / participants as f64,
            participants,
        };

        print!("{}", display::split_summary(&summary));
        self.set_phase(Phase::Settled);
        Ok(summary)
    }

    /// Broadcast a message to every registered participant in order
    pub fn notify_all(&self, message: &str) {
        for observer in &self.observers {
            observer.notify(message);
        }
    }
}

impl Default for ExpenseManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records broadcast messages instead of printing them
    struct Recorder {
        messages: Rc<RefCell<Vec<String>>>,
    }

    impl Notify for Recorder {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn manager_with_recorders(count: usize) -> (ExpenseManager, Rc<RefCell<Vec<String>>>) {
        let messages = Rc::new(RefCell::new(Vec::new()));
        let mut manager = ExpenseManager::new();
        for _ in 0..count {
            manager.subscribe(Box::new(Recorder {
                messages: Rc::clone(&messages),
            }));
        }
        (manager, messages)
    }

    #[test]
    fn test_add_expense_accumulates_total() {
        let mut manager = ExpenseManager::new();
        manager.register_participant("Laxmikant");

        manager.add_expense("Dinner", 500.0).unwrap();
        assert_eq!(manager.total(), 500.0);

        manager.add_expense("Movie Tickets", 350.0).unwrap();
        assert_eq!(manager.total(), 850.0);
        assert_eq!(manager.group().describe(), "Dinner, Movie Tickets");
    }

    #[test]
    fn test_add_expense_enters_reviewing() {
        let mut manager = ExpenseManager::new();
        manager.register_participant("Laxmikant");
        manager.add_expense("Dinner", 500.0).unwrap();
        assert_eq!(manager.phase(), Phase::Reviewing);
    }

    #[test]
    fn test_add_expense_rejects_non_positive_amounts() {
        let mut manager = ExpenseManager::new();
        manager.register_participant("Laxmikant");
        manager.set_phase(Phase::Adding);

        let err = manager.add_expense("Freebie", 0.0).unwrap_err();
        assert!(err.is_invalid_amount());
        let err = manager.add_expense("Refund", -5.0).unwrap_err();
        assert_eq!(err, SplitError::InvalidAmount(-5.0));

        // Nothing changed.
        assert_eq!(manager.total(), 0.0);
        assert!(manager.group().is_empty());
        assert_eq!(manager.participant_count(), 1);
        assert_eq!(manager.phase(), Phase::Adding);
    }

    #[test]
    fn test_rejected_expense_sends_no_notifications() {
        let (mut manager, messages) = manager_with_recorders(2);
        assert!(manager.add_expense("Refund", -5.0).is_err());
        assert!(messages.borrow().is_empty());
    }

    #[test]
    fn test_broadcast_count_matches_participants() {
        let (mut manager, messages) = manager_with_recorders(3);

        manager.add_expense("Dinner", 500.0).unwrap();
        assert_eq!(messages.borrow().len(), 3);

        manager.add_expense("Movie Tickets", 350.0).unwrap();
        assert_eq!(messages.borrow().len(), 6);

        let last = messages.borrow().last().unwrap().clone();
        assert_eq!(last, "New expense added: Movie Tickets - $350.00");
    }

    #[test]
    fn test_split_divides_evenly() {
        let mut manager = ExpenseManager::new();
        manager.register_participant("Laxmikant");
        manager.register_participant("Mayank");
        manager.add_expense("Dinner", 500.0).unwrap();
        manager.add_expense("Movie Tickets", 350.0).unwrap();

        let summary = manager.review_and_split().unwrap();
        assert_eq!(summary.total, 850.0);
        assert_eq!(summary.share, 425.0);
        assert_eq!(summary.participants, 2);
        assert_eq!(manager.phase(), Phase::Settled);
    }

    #[test]
    fn test_split_share_is_plain_division() {
        let mut manager = ExpenseManager::new();
        for name in ["A", "B", "C"] {
            manager.register_participant(name);
        }
        manager.add_expense("Dinner", 100.0).unwrap();

        let summary = manager.review_and_split().unwrap();
        assert_eq!(summary.share, 100.0 / 3.0);
    }

    #[test]
    fn test_split_without_participants_errors() {
        let mut manager = ExpenseManager::new();
        manager.set_phase(Phase::Adding);

        let err = manager.review_and_split().unwrap_err();
        assert!(err.is_no_participants());
        assert_eq!(manager.phase(), Phase::Adding);
        assert_eq!(manager.total(), 0.0);
    }

    #[test]
    fn test_split_with_no_expenses_is_zero() {
        let mut manager = ExpenseManager::new();
        manager.register_participant("Laxmikant");

        let summary = manager.review_and_split().unwrap();
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.share, 0.0);
    }

    #[test]
    fn test_duplicate_names_both_receive_broadcasts() {
        let messages = Rc::new(RefCell::new(Vec::new()));
        let mut manager = ExpenseManager::new();
        for _ in 0..2 {
            manager.subscribe(Box::new(Recorder {
                messages: Rc::clone(&messages),
            }));
        }
        // No duplicate check on names either.
        manager.register_participant("Mayank");
        manager.register_participant("Mayank");
        assert_eq!(manager.participant_count(), 4);

        manager.add_expense("Dinner", 500.0).unwrap();
        assert_eq!(messages.borrow().len(), 2);
    }
}
