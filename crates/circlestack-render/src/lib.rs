//! CircleStack Render Library
//!
//! Renderer abstraction and the SVG backend for the CircleStack widget. The
//! live on-screen surface (egui) consumes the same layouts through the app
//! crate; this crate covers everything that renders a layout to a document.

mod renderer;
mod svg_impl;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, FRAME_COLOR};
pub use svg_impl::SvgRenderer;
