//! Participants and the notification capability
//!
//! A [`Participant`] is a named notification target. The [`Notify`] trait is
//! the seam between the expense manager and whatever receives its broadcasts;
//! the concrete participant prints to stdout, while tests substitute recording
//! observers.

/// A notification target
///
/// Notification cannot fail, so `notify` returns nothing.
pub trait Notify {
    /// Deliver a broadcast message to this target
    fn notify(&self, message: &str);
}

/// A named participant in the shared expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
}

impl Participant {
    /// Create a participant with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The participant's name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Notify for Participant {
    fn notify(&self, message: &str) {
        println!("{} received notification: {}", self.name, message);
    }
}
