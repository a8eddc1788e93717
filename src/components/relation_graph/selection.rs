use log::debug;

use super::index::RelationIndex;
use super::placement::{PopupPosition, Rect, Size, place_popup};
use crate::content::RelationRecord;

/// The node whose detail popup is open.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
	pub node_id: String,
	pub relation: &'static RelationRecord,
	/// Screen rectangle of the node the popup was placed against.
	pub anchor: Rect,
	pub position: PopupPosition,
}

/// Which node is inspected, and where its popup sits on screen.
#[derive(Clone, Debug)]
pub struct GraphSelection {
	index: RelationIndex,
	active: Option<SelectionState>,
}

impl GraphSelection {
	pub fn new(index: RelationIndex) -> Self {
		Self { index, active: None }
	}

	pub fn active(&self) -> Option<&SelectionState> {
		self.active.as_ref()
	}

	pub fn selected_node(&self) -> Option<&str> {
		self.active.as_ref().map(|s| s.node_id.as_str())
	}

	/// Open the popup for `node_id`. Nodes without a record (the center)
	/// close any open popup instead. Returns whether a popup is now open.
	pub fn select_node(&mut self, node_id: &str, anchor: Rect, popup: Size, viewport: Size) -> bool {
		let Some(relation) = self.index.record(node_id) else {
			debug!("select `{node_id}`: no record, clearing selection");
			self.active = None;
			return false;
		};
		let position = place_popup(anchor, popup, viewport);
		debug!("select `{node_id}` ({}) at {position:?}", relation.name);
		self.active = Some(SelectionState {
			node_id: node_id.to_string(),
			relation,
			anchor,
			position,
		});
		true
	}

	pub fn deselect(&mut self) {
		if self.active.take().is_some() {
			debug!("selection cleared");
		}
	}

	/// Re-place the popup against the selected node's new screen rectangle.
	pub fn on_viewport_resize(&mut self, anchor: Rect, popup: Size, viewport: Size) {
		if let Some(active) = self.active.as_mut() {
			active.anchor = anchor;
			active.position = place_popup(anchor, popup, viewport);
		}
	}

	/// Re-place the popup against its current anchor once its real size is known.
	pub fn remeasure(&mut self, popup: Size, viewport: Size) {
		if let Some(active) = self.active.as_mut() {
			active.position = place_popup(active.anchor, popup, viewport);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relation_graph::placement::PopupAlign;
	use crate::content::graph::CENTER_NODE_ID;
	use crate::content::{RELATIONS, relation_graph};

	const VIEWPORT: Size = Size {
		width: 800.0,
		height: 600.0,
	};
	const POPUP: Size = Size {
		width: 300.0,
		height: 200.0,
	};

	fn selection() -> GraphSelection {
		GraphSelection::new(RelationIndex::build(&relation_graph(), RELATIONS).unwrap())
	}

	fn rect() -> Rect {
		Rect {
			left: 400.0,
			top: 100.0,
			right: 500.0,
			bottom: 160.0,
		}
	}

	#[test]
	fn selecting_a_relation_opens_its_popup() {
		let mut sel = selection();
		assert!(sel.select_node("suzhe", rect(), POPUP, VIEWPORT));
		let active = sel.active().unwrap();
		assert_eq!(active.relation.name, "苏辙");
		assert_eq!(active.position.x, 90.0);
		assert_eq!(active.position.y, 20.0);
		assert_eq!(active.position.align, PopupAlign::Top);
		assert_eq!(sel.selected_node(), Some("suzhe"));
	}

	#[test]
	fn selecting_the_center_clears_the_popup() {
		let mut sel = selection();
		sel.select_node("mifu", rect(), POPUP, VIEWPORT);
		assert!(!sel.select_node(CENTER_NODE_ID, rect(), POPUP, VIEWPORT));
		assert!(sel.active().is_none());
	}

	#[test]
	fn deselect_is_idempotent() {
		let mut sel = selection();
		sel.deselect();
		assert!(sel.active().is_none());

		sel.select_node("foyin", rect(), POPUP, VIEWPORT);
		sel.deselect();
		sel.deselect();
		assert!(sel.active().is_none());
	}

	#[test]
	fn resize_replaces_popup_against_new_anchor() {
		let mut sel = selection();
		sel.select_node("chaoyun", rect(), POPUP, VIEWPORT);

		let moved = Rect::from_origin(100.0, 300.0, 100.0, 60.0);
		sel.on_viewport_resize(moved, POPUP, Size::new(1200.0, 800.0));
		let active = sel.active().unwrap();
		assert_eq!(active.anchor, moved);
		assert_eq!(active.position.x, 210.0);
		assert_eq!(active.position.y, 300.0);
		assert_eq!(active.position.align, PopupAlign::Centered);
	}

	#[test]
	fn resize_without_selection_does_nothing() {
		let mut sel = selection();
		sel.on_viewport_resize(rect(), POPUP, VIEWPORT);
		sel.remeasure(POPUP, VIEWPORT);
		assert!(sel.active().is_none());
	}

	#[test]
	fn remeasure_keeps_anchor() {
		let mut sel = selection();
		let anchor = Rect::from_origin(100.0, 300.0, 100.0, 60.0);
		sel.select_node("wangfu", anchor, POPUP, Size::new(1200.0, 800.0));
		sel.remeasure(Size::new(300.0, 700.0), Size::new(1200.0, 800.0));
		let active = sel.active().unwrap();
		assert_eq!(active.anchor, anchor);
		assert_eq!(active.position.y, 20.0);
	}
}
