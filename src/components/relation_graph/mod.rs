mod component;
mod index;
mod placement;
mod render;
mod selection;
mod state;
mod style;
mod types;

pub use component::RelationGraphCanvas;
pub use index::RelationIndex;
pub use placement::{DEFAULT_POPUP_SIZE, Rect, Size};
pub use selection::GraphSelection;
pub use types::{GraphData, GraphEdge, GraphNode, NodeCategory, Point};
