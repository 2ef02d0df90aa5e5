//! The circle stack display element.

use crate::color::Rgba;
use crate::element::{Element, STACK_TAG};
use crate::layout::StackLayout;
use std::any::Any;

/// Count used when the attribute is absent or unparsable.
pub const DEFAULT_COUNT: u32 = 4;
/// Fill used when the attribute is absent.
pub const DEFAULT_COLOR: &str = "#0d0";

/// Parse a count attribute as a base-10 integer.
///
/// Absent or non-numeric input yields [`DEFAULT_COUNT`]; negative values
/// clamp to zero, so a stack asked for n >= 0 circles draws exactly n.
pub fn parse_count(value: Option<&str>) -> u32 {
    match value.and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(n) => n.clamp(0, i64::from(u32::MAX)) as u32,
        None => DEFAULT_COUNT,
    }
}

/// Displays a horizontal row of identically filled circles.
///
/// Owns nothing beyond its two rendering parameters; the visual output is a
/// pure function of (count, fill) and is recomputed on mount and on every
/// parameter change.
#[derive(Debug, Clone)]
pub struct CircleStack {
    count: u32,
    fill: Rgba,
    layout: StackLayout,
}

impl CircleStack {
    /// Create a stack with the default parameters (4 circles, `#0d0`).
    pub fn new() -> Self {
        Self::with_params(DEFAULT_COUNT, Rgba::parse_lossy(DEFAULT_COLOR))
    }

    pub fn with_params(count: u32, fill: Rgba) -> Self {
        Self {
            count,
            fill,
            layout: StackLayout::compute(count, fill),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn fill(&self) -> Rgba {
        self.fill
    }

    /// The current visual output.
    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }

    fn render(&mut self) {
        self.layout = StackLayout::compute(self.count, self.fill);
    }
}

impl Default for CircleStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for CircleStack {
    fn tag(&self) -> &'static str {
        STACK_TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        &["count", "color"]
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "count" => Some(self.count.to_string()),
            "color" => Some(self.fill.to_hex()),
            _ => None,
        }
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if !self.observed_attributes().contains(&name) {
            return;
        }
        let old = self.attribute(name);
        match name {
            "count" => self.count = parse_count(Some(value)),
            "color" => self.fill = Rgba::parse_lossy(value),
            _ => unreachable!(),
        }
        if let Some(new) = self.attribute(name) {
            if old.as_deref() != Some(new.as_str()) {
                self.attribute_changed(name, old.as_deref(), &new);
            }
        }
    }

    fn mounted(&mut self) {
        log::debug!("<{STACK_TAG}> mounted with count={} fill={}", self.count, self.fill);
        self.render();
    }

    fn attribute_changed(&mut self, name: &str, old: Option<&str>, new: &str) {
        log::debug!("<{STACK_TAG}> {name} changed {old:?} -> {new:?}");
        self.render();
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
    use crate::color::FALLBACK_COLOR;

    #[test]
    fn test_parse_count_defaults() {
        assert_eq!(parse_count(None), 4);
        assert_eq!(parse_count(Some("")), 4);
        assert_eq!(parse_count(Some("four")), 4);
        assert_eq!(parse_count(Some("4.5")), 4);
    }

    #[test]
    fn test_parse_count_values() {
        assert_eq!(parse_count(Some("0")), 0);
        assert_eq!(parse_count(Some("1")), 1);
        assert_eq!(parse_count(Some(" 12 ")), 12);
        assert_eq!(parse_count(Some("-3")), 0);
    }

    #[test]
    fn test_default_instantiation() {
        let stack = CircleStack::new();
        assert_eq!(stack.count(), 4);
        assert_eq!(stack.fill(), Rgba::opaque(0, 0xdd, 0));
        assert_eq!(stack.layout().circles.len(), 4);
    }

    #[test]
    fn test_attribute_round_trip() {
        let mut stack = CircleStack::new();
        stack.set_attribute("count", "7");
        stack.set_attribute("color", "#ff0000");
        assert_eq!(stack.attribute("count").as_deref(), Some("7"));
        assert_eq!(stack.attribute("color").as_deref(), Some("#ff0000"));
        assert_eq!(stack.attribute("title"), None);
    }

    #[test]
    fn test_set_count_rerenders() {
        let mut stack = CircleStack::new();
        stack.set_attribute("count", "9");
        assert_eq!(stack.layout().circles.len(), 9);
        assert!((stack.layout().width() - 360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_count_degrades_to_default() {
        let mut stack = CircleStack::new();
        stack.set_attribute("count", "2");
        stack.set_attribute("count", "lots");
        assert_eq!(stack.count(), 4);
        assert_eq!(stack.layout().circles.len(), 4);
    }

    #[test]
    fn test_invalid_color_degrades_to_fallback() {
        let mut stack = CircleStack::new();
        stack.set_attribute("color", "not-a-color");
        assert_eq!(stack.fill(), FALLBACK_COLOR);
        assert_eq!(stack.layout().fill, FALLBACK_COLOR);
    }

    #[test]
    fn test_unobserved_attribute_ignored() {
        let mut stack = CircleStack::new();
        stack.set_attribute("title", "hello");
        assert_eq!(stack.count(), 4);
        assert_eq!(stack.attribute("title"), None);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut stack = CircleStack::new();
        stack.set_attribute("count", "6");
        let first = stack.layout().clone();
        stack.set_attribute("count", "6");
        assert_eq!(*stack.layout(), first);
    }

    #[test]
    fn test_zero_count_renders_no_circles() {
        let mut stack = CircleStack::new();
        stack.set_attribute("count", "0");
        assert!(stack.layout().circles.is_empty());
    }
}
