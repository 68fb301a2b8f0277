use anyhow::Result;
use clap::{Parser, Subcommand};

use quicksplit::cli::{handle_demo_command, handle_split_command, SplitArgs};

#[derive(Parser)]
#[command(
    name = "quicksplit",
    version,
    about = "Track shared expenses and split them evenly",
    long_about = "QuickSplit tracks a shared list of expenses among a group of \
                  participants, notifies everyone when an expense is added, and \
                  splits the total cost evenly across the group."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fixed demo scenario
    Demo,

    /// Split expenses given on the command line across participants
    Split(SplitArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Split(args)) => handle_split_command(args),
        // The demo doubles as the default action.
        Some(Commands::Demo) | None => handle_demo_command(),
    }

    Ok(())
}
