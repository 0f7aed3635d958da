//! Line-segment rendering
//!
//! The ladder is emitted as stroked segments into any `LineSink`: a recording
//! `DrawList`, a triangle `MeshBuilder` for vertex buffers, or an `SvgCanvas`.

pub mod draw;
pub mod shapes;
pub mod sink;
pub mod svg;
pub mod vertex;

pub use draw::{Style, draw_ladder, draw_path, draw_session};
pub use shapes::MeshBuilder;
pub use sink::{DrawList, LineSegment, LineSink};
pub use svg::SvgCanvas;
pub use vertex::Vertex;
