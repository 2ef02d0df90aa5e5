//! SVG rendering backend.
//!
//! Materializes a stack layout as an SVG document: one `<circle>` element
//! per layout circle, in index order, on a surface sized by the layout.

use crate::renderer::{RenderContext, RenderResult, Renderer, FRAME_COLOR};
use std::path::Path;
use svg::node::element::{Circle, Rectangle};
use svg::Document;

/// Renderer producing an [`svg::Document`].
pub struct SvgRenderer {
    document: Document,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
        }
    }

    /// The document built by the last [`Renderer::build_scene`] pass.
    ///
    /// Empty until the first pass.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serialize the current document as SVG markup.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    /// Write the current document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        svg::save(path, &self.document)?;
        Ok(())
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        let layout = ctx.layout;
        let mut document = Document::new()
            .set("width", layout.width())
            .set("height", layout.height());
        if ctx.framed {
            document = document.set(
                "style",
                format!("border: 1px solid {}", FRAME_COLOR.to_hex()),
            );
        }
        if let Some(background) = ctx.background {
            document = document.add(
                Rectangle::new()
                    .set("width", layout.width())
                    .set("height", layout.height())
                    .set("fill", background.to_hex()),
            );
        }
        let fill = layout.fill.to_hex();
        for circle in &layout.circles {
            document = document.add(
                Circle::new()
                    .set("cx", circle.center.x)
                    .set("cy", circle.center.y)
                    .set("r", circle.radius)
                    .set("fill", fill.as_str()),
            );
        }
        self.document = document;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlestack_core::{Rgba, StackLayout};

    fn render(layout: &StackLayout) -> String {
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&RenderContext::new(layout));
        renderer.to_svg_string()
    }

    #[test]
    fn test_one_circle_element_per_layout_circle() {
        let layout = StackLayout::compute(5, Rgba::opaque(0, 0xdd, 0));
        let markup = render(&layout);
        assert_eq!(markup.matches("<circle").count(), 5);
    }

    #[test]
    fn test_surface_dimensions() {
        let layout = StackLayout::compute(4, Rgba::opaque(0, 0xdd, 0));
        let markup = render(&layout);
        assert!(markup.contains("width=\"160\""));
        assert!(markup.contains("height=\"60\""));
    }

    #[test]
    fn test_circle_geometry_and_fill() {
        let layout = StackLayout::compute(2, Rgba::opaque(0xff, 0, 0));
        let markup = render(&layout);
        assert!(markup.contains("cx=\"30\""));
        assert!(markup.contains("cx=\"60\""));
        assert!(markup.contains("cy=\"30\""));
        assert!(markup.contains("r=\"20\""));
        assert_eq!(markup.matches("fill=\"#ff0000\"").count(), 2);
    }

    #[test]
    fn test_empty_layout_has_no_circles() {
        let layout = StackLayout::compute(0, Rgba::opaque(0, 0, 0));
        let markup = render(&layout);
        assert_eq!(markup.matches("<circle").count(), 0);
    }

    #[test]
    fn test_output_is_deterministic() {
        let layout = StackLayout::compute(3, Rgba::opaque(1, 2, 3));
        assert_eq!(render(&layout), render(&layout));
    }

    #[test]
    fn test_frame_style() {
        let layout = StackLayout::compute(1, Rgba::opaque(0, 0, 0));
        let markup = render(&layout);
        assert!(markup.contains("border: 1px solid #cccccc"));

        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&RenderContext::new(&layout).with_frame(false));
        assert!(!renderer.to_svg_string().contains("border"));
    }

    #[test]
    fn test_background_rect() {
        let layout = StackLayout::compute(1, Rgba::opaque(0, 0, 0));
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&RenderContext::new(&layout).with_background(Rgba::opaque(250, 250, 250)));
        let markup = renderer.to_svg_string();
        assert!(markup.contains("<rect"));
        assert!(markup.contains("fill=\"#fafafa\""));
    }
}
