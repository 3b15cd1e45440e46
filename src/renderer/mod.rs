//! WebGPU rendering module
//!
//! Scenes draw into a `VertexCanvas`, which tessellates everything into flat
//! colored triangles; `RenderState` uploads and presents them once per frame.

pub mod canvas;
pub mod font;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::VertexCanvas;
pub use pipeline::{RenderError, RenderState};
pub use vertex::Vertex;
