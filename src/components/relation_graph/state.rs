use std::collections::HashMap;

use super::placement::Rect;
use super::style::{NodeStyle, node_style};
use super::types::{GraphData, NodeCategory};
use crate::config::GraphViewConfig;

#[derive(Clone, Debug)]
pub struct NodeView {
	pub id: String,
	pub label: String,
	pub category: NodeCategory,
	/// Top-left corner in graph space.
	pub x: f64,
	pub y: f64,
}

impl NodeView {
	pub fn style(&self, hovered: bool) -> NodeStyle {
		node_style(self.category, hovered)
	}

	/// Node box in graph space.
	pub fn bounds(&self) -> Rect {
		let style = self.style(false);
		Rect::from_origin(self.x, self.y, style.width, style.height)
	}

	pub fn center(&self) -> (f64, f64) {
		let b = self.bounds();
		((b.left + b.right) / 2.0, (b.top + b.bottom) / 2.0)
	}
}

#[derive(Clone, Copy, Debug)]
pub struct EdgeView {
	pub source: usize,
	pub target: usize,
	pub animated: bool,
}

/// Screen = graph * `k` + (`x`, `y`).
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
	pub moved: bool,
}

/// Outcome of releasing the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
	NodeClick(usize),
	PaneClick,
	/// A drag or pan moved something.
	Moved,
	Idle,
}

/// Canvas-side view of the relation graph: node positions, pan/zoom and
/// pointer interaction.
pub struct GraphViewState {
	pub nodes: Vec<NodeView>,
	pub edges: Vec<EdgeView>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<usize>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	pub config: GraphViewConfig,
}

impl GraphViewState {
	pub fn new(data: &GraphData, width: f64, height: f64, config: GraphViewConfig) -> Self {
		let nodes: Vec<NodeView> = data
			.nodes
			.iter()
			.map(|node| NodeView {
				id: node.id.clone(),
				label: node.label.clone(),
				category: node.category,
				x: node.position.x,
				y: node.position.y,
			})
			.collect();
		let id_to_idx: HashMap<&str, usize> = nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.id.as_str(), i))
			.collect();

		let edges = data
			.edges
			.iter()
			.filter_map(|edge| {
				let (&source, &target) = (
					id_to_idx.get(edge.source.as_str())?,
					id_to_idx.get(edge.target.as_str())?,
				);
				Some(EdgeView {
					source,
					target,
					animated: edge.animated,
				})
			})
			.collect();

		let mut state = Self {
			nodes,
			edges,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			flow_time: 0.0,
			config,
		};
		state.fit_view();
		state
	}

	/// Bounding box of all nodes in graph space.
	pub fn graph_bounds(&self) -> Option<Rect> {
		self.nodes.iter().map(NodeView::bounds).reduce(|a, b| Rect {
			left: a.left.min(b.left),
			top: a.top.min(b.top),
			right: a.right.max(b.right),
			bottom: a.bottom.max(b.bottom),
		})
	}

	/// Center the graph and zoom it to fit the canvas, leaving
	/// `fit_padding` of the extent free around it.
	pub fn fit_view(&mut self) {
		let Some(bounds) = self.graph_bounds() else {
			self.transform = ViewTransform {
				x: self.width / 2.0,
				y: self.height / 2.0,
				k: 1.0,
			};
			return;
		};
		let pad = 1.0 + self.config.fit_padding;
		let (bw, bh) = (bounds.width().max(1.0) * pad, bounds.height().max(1.0) * pad);
		let k = self.config.clamp_zoom((self.width / bw).min(self.height / bh));
		let (cx, cy) = (
			(bounds.left + bounds.right) / 2.0,
			(bounds.top + bounds.bottom) / 2.0,
		);
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			gx * self.transform.k + self.transform.x,
			gy * self.transform.k + self.transform.y,
		)
	}

	/// Topmost node under a canvas position. Nodes drawn later win.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes
			.iter()
			.enumerate()
			.rev()
			.find(|(_, node)| node.bounds().contains(gx, gy))
			.map(|(idx, _)| idx)
	}

	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|node| node.id == id)
	}

	/// Node box in canvas coordinates.
	pub fn node_screen_rect(&self, idx: usize) -> Option<Rect> {
		let bounds = self.nodes.get(idx)?.bounds();
		let (left, top) = self.graph_to_screen(bounds.left, bounds.top);
		let (right, bottom) = self.graph_to_screen(bounds.right, bounds.bottom);
		Some(Rect {
			left,
			top,
			right,
			bottom,
		})
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<usize>) -> bool {
		if self.hovered == node {
			return false;
		}
		self.hovered = node;
		true
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hovered == Some(idx)
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.node_at_position(x, y) {
			let node = &self.nodes[idx];
			self.drag = DragState {
				active: true,
				node_idx: Some(idx),
				start_x: x,
				start_y: y,
				node_start_x: node.x,
				node_start_y: node.y,
				moved: false,
			};
		} else {
			self.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
				moved: false,
			};
		}
	}

	/// Returns whether the view or a node moved.
	pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
		if !self.drag.active {
			let hovered = self.node_at_position(x, y);
			self.set_hover(hovered);
		}

		let tolerance = self.config.click_tolerance;
		if self.drag.active {
			let Some(idx) = self.drag.node_idx else {
				return false;
			};
			let (dx, dy) = (x - self.drag.start_x, y - self.drag.start_y);
			if !self.drag.moved && dx.hypot(dy) < tolerance {
				return false;
			}
			self.drag.moved = true;
			let k = self.transform.k;
			let (nx, ny) = (self.drag.node_start_x + dx / k, self.drag.node_start_y + dy / k);
			let node = &mut self.nodes[idx];
			node.x = nx;
			node.y = ny;
			true
		} else if self.pan.active {
			let (dx, dy) = (x - self.pan.start_x, y - self.pan.start_y);
			if !self.pan.moved && dx.hypot(dy) < tolerance {
				return false;
			}
			self.pan.moved = true;
			self.transform.x = self.pan.transform_start_x + dx;
			self.transform.y = self.pan.transform_start_y + dy;
			true
		} else {
			false
		}
	}

	pub fn pointer_up(&mut self) -> Release {
		let release = if self.drag.active {
			match (self.drag.moved, self.drag.node_idx) {
				(false, Some(idx)) => Release::NodeClick(idx),
				(true, _) => Release::Moved,
				(false, None) => Release::Idle,
			}
		} else if self.pan.active {
			if self.pan.moved {
				Release::Moved
			} else {
				Release::PaneClick
			}
		} else {
			Release::Idle
		};
		self.cancel_pointer();
		release
	}

	pub fn cancel_pointer(&mut self) {
		self.drag = DragState::default();
		self.pan = PanState::default();
	}

	/// Zoom by `factor` keeping the canvas point `(x, y)` fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = self.config.clamp_zoom(self.transform.k * factor);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn zoom_by(&mut self, factor: f64) {
		self.zoom_at(self.width / 2.0, self.height / 2.0, factor);
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::graph::CENTER_NODE_ID;
	use crate::content::relation_graph;

	fn state() -> GraphViewState {
		GraphViewState::new(&relation_graph(), 1200.0, 800.0, GraphViewConfig::default())
	}

	fn screen_center_of(s: &GraphViewState, id: &str) -> (f64, f64) {
		let node = &s.nodes[s.node_index(id).unwrap()];
		let (cx, cy) = node.center();
		s.graph_to_screen(cx, cy)
	}

	#[test]
	fn fit_view_centers_graph_within_zoom_bounds() {
		let s = state();
		let cfg = GraphViewConfig::default();
		assert!(s.transform.k >= cfg.min_zoom && s.transform.k <= cfg.max_zoom);

		let b = s.graph_bounds().unwrap();
		let (left, top) = s.graph_to_screen(b.left, b.top);
		let (right, bottom) = s.graph_to_screen(b.right, b.bottom);
		assert!(((left + right) / 2.0 - 600.0).abs() < 1e-6);
		assert!(((top + bottom) / 2.0 - 400.0).abs() < 1e-6);
	}

	#[test]
	fn fit_view_clamps_zoom_on_tiny_canvas() {
		let s = GraphViewState::new(&relation_graph(), 100.0, 100.0, GraphViewConfig::default());
		assert_eq!(s.transform.k, 0.5);
	}

	#[test]
	fn empty_graph_gets_identity_zoom() {
		let s = GraphViewState::new(&GraphData::default(), 400.0, 300.0, GraphViewConfig::default());
		assert_eq!(s.transform.k, 1.0);
		assert!(s.graph_bounds().is_none());
		assert_eq!(s.node_at_position(200.0, 150.0), None);
	}

	#[test]
	fn edges_resolve_to_indices() {
		let s = state();
		let center = s.node_index(CENTER_NODE_ID).unwrap();
		assert_eq!(s.edges.len(), s.nodes.len() - 1);
		assert!(s.edges.iter().all(|e| e.source == center));
	}

	#[test]
	fn hit_testing_finds_nodes_and_misses_background() {
		let s = state();
		let (x, y) = screen_center_of(&s, "mifu");
		assert_eq!(s.node_at_position(x, y), s.node_index("mifu"));
		assert_eq!(s.node_at_position(1.0, 1.0), None);
	}

	#[test]
	fn screen_rect_matches_transform() {
		let s = state();
		let idx = s.node_index("ouyangxiu").unwrap();
		let rect = s.node_screen_rect(idx).unwrap();
		assert!((rect.width() - 150.0 * s.transform.k).abs() < 1e-9);
		assert!(s.node_screen_rect(999).is_none());
	}

	#[test]
	fn press_and_release_in_place_is_a_click() {
		let mut s = state();
		let (x, y) = screen_center_of(&s, "suzhe");
		s.pointer_down(x, y);
		assert!(!s.pointer_move(x + 1.0, y));
		assert_eq!(s.pointer_up(), Release::NodeClick(s.node_index("suzhe").unwrap()));

		s.pointer_down(1.0, 1.0);
		assert_eq!(s.pointer_up(), Release::PaneClick);
	}

	#[test]
	fn dragging_moves_the_node_not_the_view() {
		let mut s = state();
		let idx = s.node_index("suzhe").unwrap();
		let before = (s.nodes[idx].x, s.nodes[idx].y, s.transform.x);
		let (x, y) = screen_center_of(&s, "suzhe");
		s.pointer_down(x, y);
		assert!(s.pointer_move(x + 40.0, y + 20.0));
		assert_eq!(s.pointer_up(), Release::Moved);

		let k = s.transform.k;
		assert!((s.nodes[idx].x - (before.0 + 40.0 / k)).abs() < 1e-9);
		assert!((s.nodes[idx].y - (before.1 + 20.0 / k)).abs() < 1e-9);
		assert_eq!(s.transform.x, before.2);
	}

	#[test]
	fn dragging_background_pans() {
		let mut s = state();
		let start = s.transform.x;
		s.pointer_down(1.0, 1.0);
		assert!(s.pointer_move(51.0, 1.0));
		assert_eq!(s.pointer_up(), Release::Moved);
		assert_eq!(s.transform.x, start + 50.0);
		assert!(!s.drag.active && !s.pan.active);
	}

	#[test]
	fn hover_follows_pointer() {
		let mut s = state();
		let (x, y) = screen_center_of(&s, "foyin");
		s.pointer_move(x, y);
		assert!(s.is_hovered(s.node_index("foyin").unwrap()));
		assert!(!s.set_hover(s.hovered));
		s.pointer_move(1.0, 1.0);
		assert_eq!(s.hovered, None);
	}

	#[test]
	fn zoom_is_clamped_and_keeps_cursor_fixed() {
		let mut s = state();
		let (gx, gy) = s.screen_to_graph(300.0, 200.0);
		s.zoom_at(300.0, 200.0, 1.1);
		let (sx, sy) = s.graph_to_screen(gx, gy);
		assert!((sx - 300.0).abs() < 1e-9 && (sy - 200.0).abs() < 1e-9);

		for _ in 0..50 {
			s.zoom_by(1.2);
		}
		assert_eq!(s.transform.k, 1.5);
		for _ in 0..50 {
			s.zoom_by(1.0 / 1.2);
		}
		assert_eq!(s.transform.k, 0.5);
	}
}
