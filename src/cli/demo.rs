//! The fixed demo scenario
//!
//! Registers two participants, adds two expenses, and settles the split.
//! Doubles as a smoke test of the full add/notify/split path.

use crate::models::Phase;
use crate::services::ExpenseManager;

/// Run the canonical demo sequence
pub fn handle_demo_command() {
    let mut manager = ExpenseManager::new();

    manager.register_participant("Laxmikant");
    manager.register_participant("Mayank");

    manager.set_phase(Phase::Adding);

    for (description, amount) in [("Dinner", 500.0), ("Movie Tickets", 350.0)] {
        if let Err(err) = manager.add_expense(description, amount) {
            println!("Error: {}", err);
        }
    }

    if let Err(err) = manager.review_and_split() {
        println!("Error: {}", err);
    }
}
