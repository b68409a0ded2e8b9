//! Control types the action system binds to.

use std::any::Any;

/// Base trait for interactive controls.
///
/// This is the host-toolkit seam: the action system only needs identity
/// (carried by handles) and downcasting, so the trait stays minimal.
pub trait Control: Any {
    /// Short human-readable label used in logs.
    fn debug_label(&self) -> &str;

    /// Get the control as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get the control as mutable Any for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A push button.
#[derive(Debug, Default)]
pub struct Button {
    pub label: String,
    /// True while a touch is down on the button.
    pub is_pressed: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_pressed: false,
        }
    }
}

impl Control for Button {
    fn debug_label(&self) -> &str {
        &self.label
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A continuous-value slider.
#[derive(Debug)]
pub struct Slider {
    pub value: f32,
    pub min: f32,
    pub max: f32,
}

impl Slider {
    /// Create a slider spanning `min..=max`, starting at `min`.
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            value: min,
            min,
            max,
        }
    }

    /// Clamp `value` into range and store it.
    ///
    /// Returns true if the stored value changed.
    pub fn set_value(&mut self, value: f32) -> bool {
        let clamped = value.clamp(self.min, self.max);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }
}

impl Control for Slider {
    fn debug_label(&self) -> &str {
        "slider"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A single-line text field.
#[derive(Debug, Default)]
pub struct TextField {
    pub value: String,
    /// True while an editing session is active.
    pub is_editing: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field's contents.
    ///
    /// Returns true if the contents changed.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }
}

impl Control for TextField {
    fn debug_label(&self) -> &str {
        "text field"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
