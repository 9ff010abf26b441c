//! Terminal presentation layer: framebuffer, renderer, and puzzle view.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{HanoiView, Viewport};
