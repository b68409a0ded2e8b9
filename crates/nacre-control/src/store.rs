//! Control storage with generational liveness tracking.

use crate::control::Control;
use crate::handle::{ControlHandle, ControlId};
use nacre_core::alloc::{HashMap, HashSet};

/// Entry in control storage with generation tracking.
struct ControlEntry {
    control: Box<dyn Control>,
    /// Current generation; a handle is live only while this matches.
    generation: u32,
    /// Selector names this control is subscribed to at the host level.
    subscriptions: HashSet<&'static str>,
}

/// Owns every live control and answers handle liveness queries.
///
/// The store doubles as the weak-reference mechanism for the action system:
/// handles carry (id, generation) and every access checks the generation,
/// so removing a control invalidates all outstanding handles without those
/// handles owning anything. The action registry queries [`is_live`] during
/// its compaction sweeps.
///
/// [`is_live`]: ControlStore::is_live
pub struct ControlStore {
    controls: HashMap<ControlId, ControlEntry>,
    /// Next ID to allocate. Monotonic, so IDs are never reused.
    next_id: u64,
}

impl ControlStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            controls: HashMap::new(),
            next_id: 0,
        }
    }

    /// Add a control, returning its handle.
    pub fn add<T: Control + 'static>(&mut self, control: T) -> ControlHandle {
        let id = ControlId(self.next_id);
        self.next_id += 1;

        self.controls.insert(
            id,
            ControlEntry {
                control: Box::new(control),
                generation: 0,
                subscriptions: HashSet::new(),
            },
        );

        ControlHandle::new(id, 0)
    }

    /// Get a shared reference to a control.
    ///
    /// Returns None for stale handles (removed control or generation
    /// mismatch).
    pub fn get(&self, handle: ControlHandle) -> Option<&dyn Control> {
        let entry = self.controls.get(&handle.id())?;
        if entry.generation != handle.generation() {
            return None;
        }
        Some(&*entry.control)
    }

    /// Get a mutable reference to a control.
    pub fn get_mut(&mut self, handle: ControlHandle) -> Option<&mut dyn Control> {
        let entry = self.controls.get_mut(&handle.id())?;
        if entry.generation != handle.generation() {
            return None;
        }
        Some(&mut *entry.control)
    }

    /// Remove a control, invalidating every outstanding handle to it.
    pub fn remove(&mut self, handle: ControlHandle) -> Option<Box<dyn Control>> {
        let entry = self.controls.get(&handle.id())?;
        if entry.generation != handle.generation() {
            return None;
        }
        let entry = self.controls.remove(&handle.id())?;
        tracing::trace!(control = ?handle, "removed control");
        Some(entry.control)
    }

    /// Whether `handle` still refers to a stored control.
    pub fn is_live(&self, handle: ControlHandle) -> bool {
        self.controls
            .get(&handle.id())
            .is_some_and(|entry| entry.generation == handle.generation())
    }

    /// Subscribe a control to a host selector.
    ///
    /// Idempotent: subscribing the same pair twice is harmless, matching
    /// how native toolkits treat repeated target registration. Returns
    /// false if the handle is stale.
    pub fn subscribe(&mut self, handle: ControlHandle, selector: &'static str) -> bool {
        let Some(entry) = self.controls.get_mut(&handle.id()) else {
            return false;
        };
        if entry.generation != handle.generation() {
            return false;
        }
        if entry.subscriptions.insert(selector) {
            tracing::trace!(control = ?handle, selector, "subscribed control");
        }
        true
    }

    /// Whether `handle` is subscribed to `selector`.
    pub fn is_subscribed(&self, handle: ControlHandle, selector: &str) -> bool {
        self.controls
            .get(&handle.id())
            .is_some_and(|entry| {
                entry.generation == handle.generation() && entry.subscriptions.contains(selector)
            })
    }

    /// Number of live controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the store holds no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl Default for ControlStore {
    fn default() -> Self {
        Self::new()
    }
}
