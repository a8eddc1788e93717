#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Role of a person in the relation graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeCategory {
	Center,
	Family,
	Friend,
	Mentor,
}

impl NodeCategory {
	pub const ALL: [NodeCategory; 4] = [
		NodeCategory::Center,
		NodeCategory::Family,
		NodeCategory::Friend,
		NodeCategory::Mentor,
	];

	/// Solid color used by the legend and the minimap.
	pub fn swatch(self) -> &'static str {
		match self {
			NodeCategory::Center => "#3b82f6",
			NodeCategory::Family => "#ef4444",
			NodeCategory::Friend => "#10b981",
			NodeCategory::Mentor => "#8b5cf6",
		}
	}

	pub fn legend_label(self) -> &'static str {
		match self {
			NodeCategory::Center => "苏东坡",
			NodeCategory::Family => "家人",
			NodeCategory::Friend => "朋友",
			NodeCategory::Mentor => "师长",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	/// Top-left corner of the node box in graph space.
	pub position: Point,
	pub category: NodeCategory,
	/// Name and relation, separated by a line break.
	pub label: String,
	/// Detail record shown when the node is clicked; `None` for the center.
	pub relation_id: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub id: String,
	pub source: String,
	pub target: String,
	pub animated: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}
