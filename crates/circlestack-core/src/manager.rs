//! The manager panel element: owns the interactive controls and mediates
//! every user action into parameter updates on the embedded stack.

use crate::element::{Element, MANAGER_TAG};
use crate::stack::{parse_count, CircleStack, DEFAULT_COLOR};
use std::any::Any;

/// Container element wrapping a [`CircleStack`] plus the canonical values of
/// the two color controls (free-text field and picker).
///
/// The applied color lives on the stack; the control values mirror it so the
/// host's widgets always display the color currently in effect. The manager
/// exposes no external attributes of its own.
#[derive(Debug, Clone)]
pub struct StackManager {
    stack: CircleStack,
    field_value: String,
    picker_value: String,
}

impl StackManager {
    pub fn new() -> Self {
        Self {
            stack: CircleStack::new(),
            field_value: DEFAULT_COLOR.to_string(),
            picker_value: DEFAULT_COLOR.to_string(),
        }
    }

    pub fn stack(&self) -> &CircleStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut CircleStack {
        &mut self.stack
    }

    /// Value the free-text color field should display.
    pub fn field_value(&self) -> &str {
        &self.field_value
    }

    /// Value the color picker should display.
    pub fn picker_value(&self) -> &str {
        &self.picker_value
    }

    /// Grow the stack by one circle. No upper bound.
    pub fn add_circle(&mut self) {
        let count = parse_count(self.stack.attribute("count").as_deref());
        self.stack.set_attribute("count", &(count + 1).to_string());
        log::debug!("add_circle -> {}", count + 1);
    }

    /// Shrink the stack by one circle, never below one.
    pub fn remove_circle(&mut self) {
        let count = parse_count(self.stack.attribute("count").as_deref());
        if count > 1 {
            self.stack.set_attribute("count", &(count - 1).to_string());
            log::debug!("remove_circle -> {}", count - 1);
        }
    }

    /// Apply a new fill color and synchronize both controls with it.
    ///
    /// A control value is overwritten only when it actually differs, so a
    /// control reporting its own change is never written back to.
    pub fn update_color(&mut self, new_color: &str) {
        self.stack.set_attribute("color", new_color);
        if self.field_value != new_color {
            self.field_value = new_color.to_string();
        }
        if self.picker_value != new_color {
            self.picker_value = new_color.to_string();
        }
    }
}

impl Default for StackManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for StackManager {
    fn tag(&self) -> &'static str {
        MANAGER_TAG
    }

    fn mounted(&mut self) {
        log::debug!("<{MANAGER_TAG}> mounted");
        self.stack.mounted();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_defaults() {
        let manager = StackManager::new();
        assert_eq!(manager.stack().count(), 4);
        assert_eq!(manager.field_value(), "#0d0");
        assert_eq!(manager.picker_value(), "#0d0");
    }

    #[test]
    fn test_add_circle() {
        let mut manager = StackManager::new();
        manager.add_circle();
        assert_eq!(manager.stack().count(), 5);
    }

    #[test]
    fn test_add_circle_is_unbounded() {
        let mut manager = StackManager::new();
        for _ in 0..100 {
            manager.add_circle();
        }
        assert_eq!(manager.stack().count(), 104);
    }

    #[test]
    fn test_remove_circle() {
        let mut manager = StackManager::new();
        manager.remove_circle();
        manager.remove_circle();
        assert_eq!(manager.stack().count(), 2);
        manager.remove_circle();
        assert_eq!(manager.stack().count(), 1);
    }

    #[test]
    fn test_remove_circle_stops_at_one() {
        let mut manager = StackManager::new();
        for _ in 0..10 {
            manager.remove_circle();
        }
        assert_eq!(manager.stack().count(), 1);
        manager.remove_circle();
        assert_eq!(manager.stack().count(), 1);
    }

    #[test]
    fn test_update_color_syncs_both_controls() {
        let mut manager = StackManager::new();
        manager.update_color("#ff0000");
        assert_eq!(manager.stack().fill(), Rgba::opaque(255, 0, 0));
        assert_eq!(manager.field_value(), "#ff0000");
        assert_eq!(manager.picker_value(), "#ff0000");
    }

    #[test]
    fn test_update_color_is_idempotent() {
        let mut manager = StackManager::new();
        manager.update_color("#123456");
        let stack_before = manager.stack().layout().clone();
        manager.update_color("#123456");
        assert_eq!(*manager.stack().layout(), stack_before);
        assert_eq!(manager.field_value(), "#123456");
    }

    #[test]
    fn test_update_color_keeps_raw_control_text() {
        // Controls echo the committed string; only the stack normalizes it.
        let mut manager = StackManager::new();
        manager.update_color("red");
        assert_eq!(manager.field_value(), "red");
        assert_eq!(manager.stack().fill(), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_count_changes_leave_color_alone() {
        let mut manager = StackManager::new();
        manager.update_color("#336699");
        manager.add_circle();
        manager.remove_circle();
        assert_eq!(manager.stack().fill(), Rgba::opaque(0x33, 0x66, 0x99));
        assert_eq!(manager.field_value(), "#336699");
    }
}
