//! Generational handles to controls.

use std::fmt;

/// Identifier allocated by the control store. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub(crate) u64);

impl ControlId {
    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControlId({})", self.0)
    }
}

/// Weak handle to a control.
///
/// A handle is just (id, generation); it never keeps its control alive.
/// Once the control is removed from its store the generation no longer
/// matches, and every outstanding copy of the handle observes the control
/// as gone. Equality compares both components, which is the identity check
/// dispatch relies on: two handles name the same control only if id and
/// generation both match. Similar to generational-arena or slotmap indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlHandle {
    id: ControlId,
    generation: u32,
}

impl ControlHandle {
    /// Create a new handle (only the store hands these out).
    pub(crate) fn new(id: ControlId, generation: u32) -> Self {
        Self { id, generation }
    }

    /// Get the control ID.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Get the generation.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_copy() {
        let handle = ControlHandle::new(ControlId(1), 0);
        let copy = handle;
        assert_eq!(handle, copy);
    }

    #[test]
    fn test_generation_breaks_identity() {
        let first = ControlHandle::new(ControlId(1), 0);
        let second = ControlHandle::new(ControlId(1), 1);
        assert_eq!(first.id(), second.id());
        assert_ne!(first, second);
    }
}
