//! One-shot split command
//!
//! Takes participants and expenses from the command line, runs them through
//! the manager, and prints the even split. Invalid expenses are reported and
//! skipped rather than aborting the run.

use clap::Args;

use crate::models::Phase;
use crate::services::ExpenseManager;

/// Arguments for `quicksplit split`
#[derive(Args)]
pub struct SplitArgs {
    /// Participant name (repeatable)
    #[arg(short, long = "participant", value_name = "NAME", required = true)]
    participants: Vec<String>,

    /// Expense as DESC=AMOUNT, e.g. "Dinner=500" (repeatable)
    #[arg(short, long = "expense", value_name = "DESC=AMOUNT", required = true)]
    expenses: Vec<String>,
}

/// Handle the split command
pub fn handle_split_command(args: SplitArgs) {
    let mut manager = ExpenseManager::new();
    for name in &args.participants {
        manager.register_participant(name.clone());
    }

    manager.set_phase(Phase::Adding);

    for raw in &args.expenses {
        match parse_expense(raw) {
            Ok((description, amount)) => {
                if let Err(err) = manager.add_expense(&description, amount) {
                    println!("Error: {}", err);
                }
            }
            Err(msg) => println!("Error: {}", msg),
        }
    }

    if let Err(err) = manager.review_and_split() {
        println!("Error: {}", err);
    }
}

/// Parse a DESC=AMOUNT expense argument
fn parse_expense(raw: &str) -> Result<(String, f64), String> {
    let (description, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("Invalid expense '{}', expected DESC=AMOUNT", raw))?;

    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| format!("Invalid amount in '{}'", raw))?;

    Ok((description.trim().to_string(), amount))
}
