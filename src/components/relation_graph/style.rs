use super::types::NodeCategory;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
	/// Radial gradient with its highlight at 30% / 30% of the box.
	Radial { from: &'static str, to: &'static str },
	/// 135° linear gradient, top-left to bottom-right.
	Linear { from: &'static str, to: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub width: f64,
	pub height: f64,
	/// Box corner radius; a value of half the width draws a circle.
	pub corner_radius: f64,
	pub rotation_deg: f64,
	pub fill: Fill,
	pub border: &'static str,
	pub font_px: f64,
	pub font_weight: &'static str,
	pub line_height: f64,
	pub glow_color: &'static str,
	pub glow_blur: f64,
}

const BORDER: &str = "rgba(255, 255, 255, 0.2)";

/// Visual style of a node, derived from its category and hover state.
pub fn node_style(category: NodeCategory, hovered: bool) -> NodeStyle {
	let base = match category {
		NodeCategory::Center => NodeStyle {
			width: 180.0,
			height: 180.0,
			corner_radius: 90.0,
			rotation_deg: 0.0,
			fill: Fill::Radial {
				from: "#3b82f6",
				to: "#1d4ed8",
			},
			border: BORDER,
			font_px: 24.0,
			font_weight: "bold",
			line_height: 1.2,
			glow_color: "rgba(59, 130, 246, 0.5)",
			glow_blur: 15.0,
		},
		NodeCategory::Family => NodeStyle {
			width: 140.0,
			height: 140.0,
			corner_radius: 16.0,
			rotation_deg: -5.0,
			fill: Fill::Linear {
				from: "#ef4444",
				to: "#b91c1c",
			},
			border: BORDER,
			font_px: 16.0,
			font_weight: "600",
			line_height: 1.4,
			glow_color: "rgba(239, 68, 68, 0.3)",
			glow_blur: 10.0,
		},
		NodeCategory::Friend => NodeStyle {
			width: 130.0,
			height: 130.0,
			rotation_deg: 3.0,
			fill: Fill::Linear {
				from: "#10b981",
				to: "#047857",
			},
			glow_color: "rgba(16, 185, 129, 0.3)",
			..node_style(NodeCategory::Family, false)
		},
		NodeCategory::Mentor => NodeStyle {
			width: 150.0,
			height: 150.0,
			rotation_deg: -2.0,
			fill: Fill::Linear {
				from: "#8b5cf6",
				to: "#6d28d9",
			},
			glow_color: "rgba(139, 92, 246, 0.3)",
			..node_style(NodeCategory::Family, false)
		},
	};

	if !hovered {
		return base;
	}
	match category {
		NodeCategory::Center => NodeStyle {
			glow_color: "rgba(59, 130, 246, 0.6)",
			glow_blur: 20.0,
			..base
		},
		NodeCategory::Family => NodeStyle {
			glow_color: "rgba(239, 68, 68, 0.4)",
			glow_blur: 15.0,
			..base
		},
		NodeCategory::Friend => NodeStyle {
			glow_color: "rgba(16, 185, 129, 0.4)",
			glow_blur: 15.0,
			..base
		},
		NodeCategory::Mentor => NodeStyle {
			glow_color: "rgba(139, 92, 246, 0.4)",
			glow_blur: 15.0,
			..base
		},
	}
}
