//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod demo;
pub mod split;

pub use demo::handle_demo_command;
pub use split::{handle_split_command, SplitArgs};
