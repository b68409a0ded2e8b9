//! Native bridge: selector-keyed trampolines into the action registry.
//!
//! Host toolkits key native event notifications by handler name. Each
//! supported event kind gets one trampoline function; the host invokes it
//! with the firing control and the trampoline forwards into
//! [`ActionRegistry::dispatch`] with its fixed kind. The wiring lives in a
//! compile-time table, so an event mask without an entry can be rejected at
//! registration time instead of silently never firing.

use crate::event::ControlEvents;
use crate::handle::ControlHandle;
use crate::registry::ActionRegistry;
use crate::store::ControlStore;

/// Trampoline signature the host invokes with the firing control.
///
/// Trampolines never catch anything: a panic inside an action surfaces at
/// the call site that delivered the native event.
pub type Trampoline = fn(&mut ActionRegistry, &mut ControlStore, ControlHandle);

/// One supported event kind: its mask, its host selector name, and the
/// trampoline wired to it.
pub struct BridgeEntry {
    pub events: ControlEvents,
    pub selector: &'static str,
    pub trampoline: Trampoline,
}

/// Exact-mask lookup.
///
/// Returns None for masks outside the supported set, including combined
/// masks like `TOUCH_DOWN | VALUE_CHANGED` and the empty mask.
pub fn entry_for(events: ControlEvents) -> Option<&'static BridgeEntry> {
    BRIDGE_TABLE.iter().find(|entry| entry.events == events)
}

/// Selector-keyed lookup, for hosts that deliver notifications by name.
pub fn entry_for_selector(selector: &str) -> Option<&'static BridgeEntry> {
    BRIDGE_TABLE.iter().find(|entry| entry.selector == selector)
}

fn touch_down(registry: &mut ActionRegistry, store: &mut ControlStore, sender: ControlHandle) {
    registry.dispatch(store, sender, ControlEvents::TOUCH_DOWN);
}

fn touch_down_repeat(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::TOUCH_DOWN_REPEAT);
}

fn touch_drag_inside(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::TOUCH_DRAG_INSIDE);
}

fn touch_drag_outside(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::TOUCH_DRAG_OUTSIDE);
}

fn touch_drag_enter(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::TOUCH_DRAG_ENTER);
}

fn touch_drag_exit(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::TOUCH_DRAG_EXIT);
}

fn touch_up_inside(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::TOUCH_UP_INSIDE);
}

fn touch_up_outside(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::TOUCH_UP_OUTSIDE);
}

fn touch_cancel(registry: &mut ActionRegistry, store: &mut ControlStore, sender: ControlHandle) {
    registry.dispatch(store, sender, ControlEvents::TOUCH_CANCEL);
}

fn value_changed(registry: &mut ActionRegistry, store: &mut ControlStore, sender: ControlHandle) {
    registry.dispatch(store, sender, ControlEvents::VALUE_CHANGED);
}

fn primary_action_triggered(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::PRIMARY_ACTION_TRIGGERED);
}

fn editing_did_begin(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::EDITING_DID_BEGIN);
}

fn editing_changed(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::EDITING_CHANGED);
}

fn editing_did_end(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::EDITING_DID_END);
}

fn editing_did_end_on_exit(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::EDITING_DID_END_ON_EXIT);
}

fn all_touch_events(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::ALL_TOUCH_EVENTS);
}

fn all_editing_events(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::ALL_EDITING_EVENTS);
}

fn application_reserved(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::APPLICATION_RESERVED);
}

fn system_reserved(
    registry: &mut ActionRegistry,
    store: &mut ControlStore,
    sender: ControlHandle,
) {
    registry.dispatch(store, sender, ControlEvents::SYSTEM_RESERVED);
}

fn all_events(registry: &mut ActionRegistry, store: &mut ControlStore, sender: ControlHandle) {
    registry.dispatch(store, sender, ControlEvents::ALL_EVENTS);
}

/// Compile-time wiring of every supported event kind.
///
/// The table IS the closed enumeration of recognized events: a mask with no
/// entry here has no selector and no trampoline.
pub static BRIDGE_TABLE: &[BridgeEntry] = &[
    BridgeEntry {
        events: ControlEvents::TOUCH_DOWN,
        selector: "touch_down",
        trampoline: touch_down,
    },
    BridgeEntry {
        events: ControlEvents::TOUCH_DOWN_REPEAT,
        selector: "touch_down_repeat",
        trampoline: touch_down_repeat,
    },
    BridgeEntry {
        events: ControlEvents::TOUCH_DRAG_INSIDE,
        selector: "touch_drag_inside",
        trampoline: touch_drag_inside,
    },
    BridgeEntry {
        events: ControlEvents::TOUCH_DRAG_OUTSIDE,
        selector: "touch_drag_outside",
        trampoline: touch_drag_outside,
    },
    BridgeEntry {
        events: ControlEvents::TOUCH_DRAG_ENTER,
        selector: "touch_drag_enter",
        trampoline: touch_drag_enter,
    },
    BridgeEntry {
        events: ControlEvents::TOUCH_DRAG_EXIT,
        selector: "touch_drag_exit",
        trampoline: touch_drag_exit,
    },
    BridgeEntry {
        events: ControlEvents::TOUCH_UP_INSIDE,
        selector: "touch_up_inside",
        trampoline: touch_up_inside,
    },
    BridgeEntry {
        events: ControlEvents::TOUCH_UP_OUTSIDE,
        selector: "touch_up_outside",
        trampoline: touch_up_outside,
    },
    BridgeEntry {
        events: ControlEvents::TOUCH_CANCEL,
        selector: "touch_cancel",
        trampoline: touch_cancel,
    },
    BridgeEntry {
        events: ControlEvents::VALUE_CHANGED,
        selector: "value_changed",
        trampoline: value_changed,
    },
    BridgeEntry {
        events: ControlEvents::PRIMARY_ACTION_TRIGGERED,
        selector: "primary_action_triggered",
        trampoline: primary_action_triggered,
    },
    BridgeEntry {
        events: ControlEvents::EDITING_DID_BEGIN,
        selector: "editing_did_begin",
        trampoline: editing_did_begin,
    },
    BridgeEntry {
        events: ControlEvents::EDITING_CHANGED,
        selector: "editing_changed",
        trampoline: editing_changed,
    },
    BridgeEntry {
        events: ControlEvents::EDITING_DID_END,
        selector: "editing_did_end",
        trampoline: editing_did_end,
    },
    BridgeEntry {
        events: ControlEvents::EDITING_DID_END_ON_EXIT,
        selector: "editing_did_end_on_exit",
        trampoline: editing_did_end_on_exit,
    },
    BridgeEntry {
        events: ControlEvents::ALL_TOUCH_EVENTS,
        selector: "all_touch_events",
        trampoline: all_touch_events,
    },
    BridgeEntry {
        events: ControlEvents::ALL_EDITING_EVENTS,
        selector: "all_editing_events",
        trampoline: all_editing_events,
    },
    BridgeEntry {
        events: ControlEvents::APPLICATION_RESERVED,
        selector: "application_reserved",
        trampoline: application_reserved,
    },
    BridgeEntry {
        events: ControlEvents::SYSTEM_RESERVED,
        selector: "system_reserved",
        trampoline: system_reserved,
    },
    BridgeEntry {
        events: ControlEvents::ALL_EVENTS,
        selector: "all_events",
        trampoline: all_events,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Button;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_table_covers_twenty_kinds() {
        assert_eq!(BRIDGE_TABLE.len(), 20);
    }

    #[test]
    fn test_selectors_are_unique() {
        for (i, a) in BRIDGE_TABLE.iter().enumerate() {
            for b in &BRIDGE_TABLE[i + 1..] {
                assert_ne!(a.selector, b.selector);
                assert_ne!(a.events, b.events);
            }
        }
    }

    #[test]
    fn test_entry_for_exact_mask() {
        let entry = entry_for(ControlEvents::VALUE_CHANGED).unwrap();
        assert_eq!(entry.selector, "value_changed");

        let aggregate = entry_for(ControlEvents::ALL_TOUCH_EVENTS).unwrap();
        assert_eq!(aggregate.selector, "all_touch_events");
    }

    #[test]
    fn test_unrecognized_masks_have_no_entry() {
        assert!(entry_for(ControlEvents::TOUCH_DOWN | ControlEvents::VALUE_CHANGED).is_none());
        assert!(entry_for(ControlEvents::empty()).is_none());
    }

    #[test]
    fn test_entry_for_selector() {
        assert!(entry_for_selector("editing_changed").is_some());
        assert!(entry_for_selector("no_such_selector").is_none());
    }

    #[test]
    fn test_trampoline_dispatches_its_fixed_kind() {
        let mut store = ControlStore::new();
        let mut registry = ActionRegistry::new();
        let button = store.add(Button::new("Click"));

        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        registry.register(
            &store,
            button,
            ControlEvents::TOUCH_CANCEL,
            Box::new(move |_| counter.set(counter.get() + 1)),
        );

        let entry = entry_for(ControlEvents::TOUCH_CANCEL).unwrap();
        (entry.trampoline)(&mut registry, &mut store, button);
        assert_eq!(fired.get(), 1);

        // A different kind's trampoline never matches this record.
        let other = entry_for(ControlEvents::TOUCH_DOWN).unwrap();
        (other.trampoline)(&mut registry, &mut store, button);
        assert_eq!(fired.get(), 1);
    }
}
