//! The action registry: ordered (control, event) to closure records.

use crate::control::Control;
use crate::event::ControlEvents;
use crate::handle::ControlHandle;
use crate::store::ControlStore;

/// Stored callback shape.
///
/// Every action receives the firing control; zero-argument convenience
/// registration wraps the closure and ignores the argument, so the registry
/// never has to inspect the callback's shape at dispatch time.
pub type Action = Box<dyn FnMut(&mut dyn Control)>;

/// One registered action: target handle, exact event mask, closure.
struct ActionRecord {
    target: ControlHandle,
    events: ControlEvents,
    action: Action,
}

/// Ordered collection of action records.
///
/// Records are appended in registration order and dispatch walks them in
/// that order, so multiple actions on the same (control, event) pair fire
/// first-registered-first. Cleanup is lazy: a sweep runs before each
/// registration and after each dispatch, dropping records whose control has
/// been removed from the store. Callers never unregister explicitly and the
/// registry still cannot grow without bound; the cost is transient
/// over-retention between sweeps.
pub struct ActionRegistry {
    records: Vec<ActionRecord>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record for `(target, events)`.
    ///
    /// Compacts first so long-lived registries shed stale records even when
    /// no dispatch runs between registrations. Never fails; duplicates for
    /// the same pair are legitimate and all of them fire.
    pub fn register(
        &mut self,
        store: &ControlStore,
        target: ControlHandle,
        events: ControlEvents,
        action: Action,
    ) {
        self.compact(store);
        tracing::trace!(control = ?target, ?events, "registered action");
        self.records.push(ActionRecord {
            target,
            events,
            action,
        });
    }

    /// Invoke every record matching `(sender, events)`, in registration
    /// order.
    ///
    /// Matching is handle identity plus exact mask equality. Each matching
    /// action is called synchronously with the firing control; a panic
    /// inside an action propagates to the caller untouched. Compacts after
    /// the pass so records for a control removed mid-dispatch are pruned
    /// promptly.
    pub fn dispatch(
        &mut self,
        store: &mut ControlStore,
        sender: ControlHandle,
        events: ControlEvents,
    ) {
        let mut matched = 0usize;
        for record in self.records.iter_mut() {
            if record.target == sender && record.events == events {
                if let Some(control) = store.get_mut(record.target) {
                    (record.action)(control);
                    matched += 1;
                }
            }
        }
        tracing::debug!(control = ?sender, ?events, matched, "dispatched control event");
        self.compact(store);
    }

    /// Drop every record whose control is no longer live.
    ///
    /// Idempotent; safe on an empty registry.
    pub fn compact(&mut self, store: &ControlStore) {
        let before = self.records.len();
        self.records.retain(|record| store.is_live(record.target));
        let removed = before - self.records.len();
        if removed > 0 {
            tracing::trace!(removed, "compacted action registry");
        }
    }

    /// Total number of records, live or not yet swept.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records currently bound to `handle`.
    pub fn records_for(&self, handle: ControlHandle) -> usize {
        self.records
            .iter()
            .filter(|record| record.target == handle)
            .count()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Button;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_action(counter: &Rc<Cell<usize>>) -> Action {
        let counter = Rc::clone(counter);
        Box::new(move |_| counter.set(counter.get() + 1))
    }

    #[test]
    fn test_register_appends_record() {
        let mut store = ControlStore::new();
        let mut registry = ActionRegistry::new();
        let button = store.add(Button::new("Click"));

        let counter = Rc::new(Cell::new(0));
        registry.register(
            &store,
            button,
            ControlEvents::TOUCH_DOWN,
            counting_action(&counter),
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.records_for(button), 1);
    }

    #[test]
    fn test_register_sweeps_stale_records() {
        let mut store = ControlStore::new();
        let mut registry = ActionRegistry::new();
        let counter = Rc::new(Cell::new(0));

        let doomed = store.add(Button::new("Doomed"));
        registry.register(
            &store,
            doomed,
            ControlEvents::TOUCH_DOWN,
            counting_action(&counter),
        );
        store.remove(doomed);

        let survivor = store.add(Button::new("Survivor"));
        registry.register(
            &store,
            survivor,
            ControlEvents::TOUCH_DOWN,
            counting_action(&counter),
        );

        // The stale record was swept by the pre-registration pass.
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.records_for(doomed), 0);
    }

    #[test]
    fn test_compact_is_idempotent() {
        let mut store = ControlStore::new();
        let mut registry = ActionRegistry::new();
        let counter = Rc::new(Cell::new(0));

        let button = store.add(Button::new("Click"));
        registry.register(
            &store,
            button,
            ControlEvents::TOUCH_DOWN,
            counting_action(&counter),
        );
        store.remove(button);

        registry.compact(&store);
        assert!(registry.is_empty());
        registry.compact(&store);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_dispatch_skips_stale_record_before_sweep() {
        let mut store = ControlStore::new();
        let mut registry = ActionRegistry::new();
        let counter = Rc::new(Cell::new(0));

        let button = store.add(Button::new("Click"));
        registry.register(
            &store,
            button,
            ControlEvents::TOUCH_DOWN,
            counting_action(&counter),
        );
        store.remove(button);

        // Synthetic dispatch: the record is still present but its control
        // is gone, so nothing fires and the post-dispatch sweep prunes it.
        registry.dispatch(&mut store, button, ControlEvents::TOUCH_DOWN);
        assert_eq!(counter.get(), 0);
        assert!(registry.is_empty());
    }
}
