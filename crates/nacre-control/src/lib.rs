//! Nacre Control - closure actions for interactive controls.
//!
//! This crate replaces selector/target-action plumbing with closures:
//! register a closure for a (control, event) pair and the matching bridge
//! trampoline invokes it whenever the host fires that event on that
//! control. Controls are owned by a generational store; actions hold weak
//! handles and are swept lazily once their control is destroyed, so callers
//! never unregister anything.
//!
//! ## Quick Start
//!
//! ```
//! use nacre_control::{Button, ControlCore, ControlEvents};
//!
//! let mut core = ControlCore::new();
//! let save = core.add(Button::new("Save"));
//!
//! core.add_simple_action(save, ControlEvents::TOUCH_UP_INSIDE, || {
//!     println!("saved");
//! })
//! .unwrap();
//!
//! core.click(save);
//! ```
//!
//! All registration and dispatch happen synchronously on the calling
//! thread. Everything must stay on one thread (the UI thread); cross-thread
//! registration is unsupported.

pub mod bridge;
pub mod control;
pub mod error;
pub mod event;
pub mod handle;
pub mod registry;
pub mod store;

pub use bridge::{BridgeEntry, Trampoline};
pub use control::{Button, Control, Slider, TextField};
pub use error::{ActionError, ActionResult};
pub use event::ControlEvents;
pub use handle::{ControlHandle, ControlId};
pub use registry::{Action, ActionRegistry};
pub use store::ControlStore;

/// Owns the control store and the action registry for one UI thread.
///
/// Constructed explicitly and passed to whatever drives the event loop;
/// there is no process-wide registry.
pub struct ControlCore {
    store: ControlStore,
    registry: ActionRegistry,
}

impl ControlCore {
    /// Create an empty core.
    pub fn new() -> Self {
        Self {
            store: ControlStore::new(),
            registry: ActionRegistry::new(),
        }
    }

    /// Add a control, returning its handle.
    pub fn add<T: Control + 'static>(&mut self, control: T) -> ControlHandle {
        self.store.add(control)
    }

    /// Remove a control, invalidating its handles.
    ///
    /// Any actions bound to the control stay in the registry until the next
    /// lazy sweep; they can never fire again.
    pub fn remove(&mut self, handle: ControlHandle) -> Option<Box<dyn Control>> {
        self.store.remove(handle)
    }

    /// Get a shared reference to a control.
    pub fn get(&self, handle: ControlHandle) -> Option<&dyn Control> {
        self.store.get(handle)
    }

    /// Get a mutable reference to a control.
    pub fn get_mut(&mut self, handle: ControlHandle) -> Option<&mut dyn Control> {
        self.store.get_mut(handle)
    }

    /// Register an action for `(target, events)`.
    ///
    /// Resolves the bridge entry for the mask (Err on unrecognized masks),
    /// subscribes the control to the selector at the host level (idempotent,
    /// so double registration is harmless there), then appends a registry
    /// record. After this returns Ok, each firing of `events` on `target`
    /// invokes `action` once per registration, in registration order.
    pub fn add_action<F>(
        &mut self,
        target: ControlHandle,
        events: ControlEvents,
        action: F,
    ) -> ActionResult<()>
    where
        F: FnMut(&mut dyn Control) + 'static,
    {
        let entry =
            bridge::entry_for(events).ok_or(ActionError::UnrecognizedEvents(events))?;
        if !self.store.subscribe(target, entry.selector) {
            return Err(ActionError::ControlNotFound(target));
        }
        self.registry
            .register(&self.store, target, events, Box::new(action));
        Ok(())
    }

    /// Register a zero-argument action for `(target, events)`.
    ///
    /// Convenience wrapper over [`add_action`] that ignores the firing
    /// control.
    ///
    /// [`add_action`]: ControlCore::add_action
    pub fn add_simple_action<F>(
        &mut self,
        target: ControlHandle,
        events: ControlEvents,
        mut action: F,
    ) -> ActionResult<()>
    where
        F: FnMut() + 'static,
    {
        self.add_action(target, events, move |_| action())
    }

    /// Register an action for a button's default event (touch-up-inside).
    pub fn on_press<F>(&mut self, button: ControlHandle, action: F) -> ActionResult<()>
    where
        F: FnMut(&mut dyn Control) + 'static,
    {
        self.add_action(button, ControlEvents::TOUCH_UP_INSIDE, action)
    }

    /// Native delivery entry: fire `events` on `sender`.
    ///
    /// Stands in for the host event loop. The trampoline runs only if the
    /// mask is recognized and the control is live and subscribed to the
    /// matching selector; returns whether it ran. A panic in an action
    /// propagates out of this call.
    pub fn fire(&mut self, sender: ControlHandle, events: ControlEvents) -> bool {
        let Some(entry) = bridge::entry_for(events) else {
            tracing::trace!(?events, "fired events have no trampoline");
            return false;
        };
        if !self.store.is_subscribed(sender, entry.selector) {
            return false;
        }
        (entry.trampoline)(&mut self.registry, &mut self.store, sender);
        true
    }

    /// Selector-keyed delivery path, for hosts that hand back the handler
    /// name rather than the event mask.
    pub fn deliver(&mut self, sender: ControlHandle, selector: &str) -> bool {
        let Some(entry) = bridge::entry_for_selector(selector) else {
            tracing::trace!(selector, "unknown selector delivered");
            return false;
        };
        if !self.store.is_subscribed(sender, entry.selector) {
            return false;
        }
        (entry.trampoline)(&mut self.registry, &mut self.store, sender);
        true
    }

    /// Sweep registry records whose control has been destroyed.
    ///
    /// Runs automatically before registration and after dispatch; exposed
    /// for callers that want to reclaim promptly after bulk removal.
    pub fn compact(&mut self) {
        self.registry.compact(&self.store);
    }

    /// Press and release a button: fires touch-down, then touch-up-inside.
    ///
    /// Returns false if the handle is not a live [`Button`].
    pub fn click(&mut self, button: ControlHandle) -> bool {
        let Some(b) = self.downcast_mut::<Button>(button) else {
            return false;
        };
        b.is_pressed = true;
        self.fire(button, ControlEvents::TOUCH_DOWN);
        if let Some(b) = self.downcast_mut::<Button>(button) {
            b.is_pressed = false;
        }
        self.fire(button, ControlEvents::TOUCH_UP_INSIDE);
        true
    }

    /// Set a slider's value, firing value-changed when it actually changes.
    ///
    /// Returns whether the value changed.
    pub fn set_slider_value(&mut self, slider: ControlHandle, value: f32) -> bool {
        let Some(s) = self.downcast_mut::<Slider>(slider) else {
            return false;
        };
        let changed = s.set_value(value);
        if changed {
            self.fire(slider, ControlEvents::VALUE_CHANGED);
        }
        changed
    }

    /// Start an editing session on a text field, firing editing-did-begin.
    pub fn begin_editing(&mut self, field: ControlHandle) -> bool {
        let Some(f) = self.downcast_mut::<TextField>(field) else {
            return false;
        };
        if f.is_editing {
            return false;
        }
        f.is_editing = true;
        self.fire(field, ControlEvents::EDITING_DID_BEGIN);
        true
    }

    /// Replace a text field's contents, firing editing-changed on change.
    pub fn set_text(&mut self, field: ControlHandle, text: impl Into<String>) -> bool {
        let Some(f) = self.downcast_mut::<TextField>(field) else {
            return false;
        };
        let changed = f.set_value(text);
        if changed {
            self.fire(field, ControlEvents::EDITING_CHANGED);
        }
        changed
    }

    /// End an editing session, firing editing-did-end.
    pub fn end_editing(&mut self, field: ControlHandle) -> bool {
        let Some(f) = self.downcast_mut::<TextField>(field) else {
            return false;
        };
        if !f.is_editing {
            return false;
        }
        f.is_editing = false;
        self.fire(field, ControlEvents::EDITING_DID_END);
        true
    }

    /// Get reference to the control store.
    pub fn store(&self) -> &ControlStore {
        &self.store
    }

    /// Get reference to the action registry.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    fn downcast_mut<T: Control + 'static>(&mut self, handle: ControlHandle) -> Option<&mut T> {
        self.store.get_mut(handle)?.as_any_mut().downcast_mut::<T>()
    }
}

impl Default for ControlCore {
    fn default() -> Self {
        Self::new()
    }
}
