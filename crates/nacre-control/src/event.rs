//! Control event kinds.

use bitflags::bitflags;

bitflags! {
    /// Interaction events an interactive control can emit.
    ///
    /// Modeled as a bitmask so the aggregate masks (all touch events, all
    /// editing events) coexist with the individual kinds. Dispatch matches
    /// the registered mask exactly, never by intersection: an action bound
    /// to `ALL_TOUCH_EVENTS` fires only when the aggregate notification
    /// itself is delivered, not whenever any touch event fires.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ControlEvents: u32 {
        /// Pointer went down inside the control.
        const TOUCH_DOWN               = 1 << 0;
        /// Repeated down event (multi-tap).
        const TOUCH_DOWN_REPEAT        = 1 << 1;
        /// Drag while inside the control's bounds.
        const TOUCH_DRAG_INSIDE        = 1 << 2;
        /// Drag while outside the control's bounds.
        const TOUCH_DRAG_OUTSIDE       = 1 << 3;
        /// Drag re-entered the control's bounds.
        const TOUCH_DRAG_ENTER         = 1 << 4;
        /// Drag left the control's bounds.
        const TOUCH_DRAG_EXIT          = 1 << 5;
        /// Release inside the bounds; the canonical "tap".
        const TOUCH_UP_INSIDE          = 1 << 6;
        /// Release outside the bounds.
        const TOUCH_UP_OUTSIDE         = 1 << 7;
        /// The system cancelled the touch sequence.
        const TOUCH_CANCEL             = 1 << 8;
        /// A value-bearing control (slider, stepper) changed its value.
        const VALUE_CHANGED            = 1 << 12;
        /// Semantic primary action of the control was triggered.
        const PRIMARY_ACTION_TRIGGERED = 1 << 13;
        /// An editing session started in a text field.
        const EDITING_DID_BEGIN        = 1 << 16;
        /// Text changed during an editing session.
        const EDITING_CHANGED          = 1 << 17;
        /// The editing session ended.
        const EDITING_DID_END          = 1 << 18;
        /// Editing ended by dismissing the field (return key).
        const EDITING_DID_END_ON_EXIT  = 1 << 19;
        /// Aggregate notification covering every touch event.
        const ALL_TOUCH_EVENTS         = 0x0000_0FFF;
        /// Aggregate notification covering every editing event.
        const ALL_EDITING_EVENTS       = 0x000F_0000;
        /// Range reserved for application-defined events.
        const APPLICATION_RESERVED     = 0x0F00_0000;
        /// Range reserved for the toolkit itself.
        const SYSTEM_RESERVED          = 0xF000_0000;
        /// Aggregate notification covering everything.
        const ALL_EVENTS               = 0xFFFF_FFFF;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregates_cover_their_kinds() {
        assert!(ControlEvents::ALL_TOUCH_EVENTS.contains(ControlEvents::TOUCH_DOWN));
        assert!(ControlEvents::ALL_TOUCH_EVENTS.contains(ControlEvents::TOUCH_CANCEL));
        assert!(ControlEvents::ALL_EDITING_EVENTS.contains(ControlEvents::EDITING_CHANGED));
        assert!(!ControlEvents::ALL_TOUCH_EVENTS.contains(ControlEvents::VALUE_CHANGED));
        assert!(ControlEvents::ALL_EVENTS.contains(ControlEvents::ALL_TOUCH_EVENTS));
    }

    #[test]
    fn test_exact_match_is_not_subset_match() {
        // The dispatch path compares masks with ==, so an individual kind
        // must never compare equal to an aggregate containing it.
        assert_ne!(ControlEvents::TOUCH_DOWN, ControlEvents::ALL_TOUCH_EVENTS);
        assert_eq!(
            ControlEvents::ALL_TOUCH_EVENTS,
            ControlEvents::ALL_TOUCH_EVENTS
        );
    }

    #[test]
    fn test_combined_masks_are_distinct_values() {
        let combined = ControlEvents::TOUCH_DOWN | ControlEvents::VALUE_CHANGED;
        assert_ne!(combined, ControlEvents::TOUCH_DOWN);
        assert_ne!(combined, ControlEvents::VALUE_CHANGED);
    }
}
