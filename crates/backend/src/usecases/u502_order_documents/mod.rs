pub mod renderer;
pub mod service;

pub use renderer::{DocumentRenderer, PdfRenderer, RenderError};
pub use service::{generate, RenderedDocument};
