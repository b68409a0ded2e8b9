//! Error types for the action registration surface.

use crate::event::ControlEvents;
use crate::handle::ControlHandle;
use std::fmt;

/// Errors that can occur when registering an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// The event mask has no bridge entry, so no trampoline could ever
    /// deliver it. Older toolkits accepted such registrations and silently
    /// never fired them; rejecting up front surfaces the mistake at the
    /// call site instead.
    UnrecognizedEvents(ControlEvents),

    /// The target control was already removed from the store.
    ControlNotFound(ControlHandle),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::UnrecognizedEvents(events) => {
                write!(f, "No native trampoline for event mask {:?}", events)
            }
            ActionError::ControlNotFound(handle) => {
                write!(f, "Control {:?} is not in the store", handle)
            }
        }
    }
}

impl std::error::Error for ActionError {}

/// Result type alias for action operations.
pub type ActionResult<T> = Result<T, ActionError>;
