//! Element abstraction and tag registry.
//!
//! Components expose a string-typed attribute surface and a small lifecycle
//! (mount, attribute change). Hosts instantiate them by tag name through an
//! [`ElementRegistry`], keeping the internal representation of each element
//! opaque.

use crate::manager::StackManager;
use crate::stack::CircleStack;
use std::any::Any;
use std::collections::HashMap;

/// Tag identifier for the circle stack display element.
pub const STACK_TAG: &str = "circle-stack";
/// Tag identifier for the manager panel element.
pub const MANAGER_TAG: &str = "circle-manager";

/// An embeddable component with a declared attribute surface.
///
/// Setting an observed attribute through [`Element::set_attribute`] invokes
/// [`Element::attribute_changed`] only when the value actually changed;
/// unobserved attributes are ignored.
pub trait Element {
    /// Tag identifier this element registers under.
    fn tag(&self) -> &'static str;

    /// Attribute names this element reacts to.
    fn observed_attributes(&self) -> &'static [&'static str] {
        &[]
    }

    /// Read an attribute, formatted from the element's typed state.
    fn attribute(&self, _name: &str) -> Option<String> {
        None
    }

    /// Write an attribute, parsing into the element's typed state.
    fn set_attribute(&mut self, _name: &str, _value: &str) {}

    /// Attach callback; triggers the first render.
    fn mounted(&mut self) {}

    /// Change callback, fired after an observed attribute took a new value.
    fn attribute_changed(&mut self, _name: &str, _old: Option<&str>, _new: &str) {}

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Consume the boxed element for downcasting to its concrete type.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Factory producing a fresh, unmounted element.
pub type ElementFactory = fn() -> Box<dyn Element>;

/// Maps tag identifiers to element factories.
#[derive(Default)]
pub struct ElementRegistry {
    factories: HashMap<&'static str, ElementFactory>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with both built-in elements defined.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.define(STACK_TAG, || Box::new(CircleStack::new()));
        registry.define(MANAGER_TAG, || Box::new(StackManager::new()));
        registry
    }

    /// Define a tag. Redefining an existing tag replaces its factory.
    pub fn define(&mut self, tag: &'static str, factory: ElementFactory) {
        if self.factories.insert(tag, factory).is_some() {
            log::warn!("element tag {tag:?} redefined");
        }
    }

    /// Instantiate the element registered under `tag`, or `None` for an
    /// unknown tag. The caller mounts the element when attaching it.
    pub fn create(&self, tag: &str) -> Option<Box<dyn Element>> {
        let element = self.factories.get(tag)?();
        log::debug!("created element <{tag}>");
        Some(element)
    }

    /// Whether a tag has been defined.
    pub fn is_defined(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tags_defined() {
        let registry = ElementRegistry::with_builtins();
        assert!(registry.is_defined(STACK_TAG));
        assert!(registry.is_defined(MANAGER_TAG));
    }

    #[test]
    fn test_create_unknown_tag() {
        let registry = ElementRegistry::with_builtins();
        assert!(registry.create("marquee").is_none());
    }

    #[test]
    fn test_create_and_downcast_stack() {
        let registry = ElementRegistry::with_builtins();
        let mut element = registry.create(STACK_TAG).unwrap();
        element.mounted();
        assert_eq!(element.tag(), STACK_TAG);
        let stack = element.as_any().downcast_ref::<CircleStack>().unwrap();
        assert_eq!(stack.count(), 4);
    }

    #[test]
    fn test_into_any_yields_concrete_manager() {
        let registry = ElementRegistry::with_builtins();
        let mut element = registry.create(MANAGER_TAG).unwrap();
        element.mounted();
        let manager = element.into_any().downcast::<StackManager>().unwrap();
        assert_eq!(manager.stack().count(), 4);
    }

    #[test]
    fn test_redefine_replaces_factory() {
        let mut registry = ElementRegistry::with_builtins();
        registry.define(STACK_TAG, || Box::new(StackManager::new()));
        let element = registry.create(STACK_TAG).unwrap();
        assert_eq!(element.tag(), MANAGER_TAG);
    }
}
