//! Renderer trait abstraction.

use circlestack_core::{Rgba, StackLayout};
use thiserror::Error;

/// Stroke drawn around the stack surface (1px light gray).
pub const FRAME_COLOR: Rgba = Rgba::opaque(204, 204, 204);

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render pass over a stack layout.
pub struct RenderContext<'a> {
    /// The layout to render.
    pub layout: &'a StackLayout,
    /// Optional surface background; `None` leaves the surface transparent.
    pub background: Option<Rgba>,
    /// Whether to stroke a [`FRAME_COLOR`] border around the surface.
    pub framed: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(layout: &'a StackLayout) -> Self {
        Self {
            layout,
            background: None,
            framed: true,
        }
    }

    /// Set the background fill.
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = Some(background);
        self
    }

    /// Enable or disable the surface border.
    pub fn with_frame(mut self, framed: bool) -> Self {
        self.framed = framed;
        self
    }
}

/// Trait for rendering backends.
///
/// Implementations build a complete scene from the context each pass; the
/// layout itself is deterministic, so a backend given equal contexts must
/// produce equal output.
pub trait Renderer {
    /// Build the scene for the given context, replacing any previous one.
    fn build_scene(&mut self, ctx: &RenderContext);
}
