//! Placement of the detail popup next to a clicked node, kept inside the
//! browser viewport.

/// Minimum distance between the popup and the viewport edges.
pub const POPUP_PADDING: f64 = 20.0;
/// Horizontal gap between the node and the popup.
pub const POPUP_GAP: f64 = 10.0;
/// Size assumed before the popup has been laid out once.
pub const DEFAULT_POPUP_SIZE: Size = Size {
	width: 448.0,
	height: 260.0,
};

/// Axis-aligned rectangle in screen (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
}

impl Rect {
	pub fn from_origin(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			left,
			top,
			right: left + width,
			bottom: top + height,
		}
	}

	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	pub fn height(&self) -> f64 {
		self.bottom - self.top
	}

	pub fn translate(&self, dx: f64, dy: f64) -> Self {
		Self {
			left: self.left + dx,
			top: self.top + dy,
			right: self.right + dx,
			bottom: self.bottom + dy,
		}
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
	}
}

/// Width and height in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// How the popup hangs off its `y` coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupAlign {
	/// Vertically centered on `y`.
	#[default]
	Centered,
	/// Top edge at `y`.
	Top,
}

impl PopupAlign {
	pub fn css_transform(self) -> &'static str {
		match self {
			PopupAlign::Centered => "translateY(-50%)",
			PopupAlign::Top => "translateY(0)",
		}
	}
}

/// Fixed-position coordinates of the popup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PopupPosition {
	/// Left edge.
	pub x: f64,
	/// Vertical reference, interpreted through `align`.
	pub y: f64,
	pub align: PopupAlign,
}

/// Place a popup of `popup` size beside `anchor`.
///
/// The popup goes to the right of the anchor, vertically centered on its top
/// edge. It flips to the left side when it would overflow the right edge, and
/// is pinned to the top or bottom padding when its centered extent leaves the
/// viewport. A popup wider than the viewport is not clamped further.
pub fn place_popup(anchor: Rect, popup: Size, viewport: Size) -> PopupPosition {
	let mut x = anchor.right + POPUP_GAP;
	let mut y = anchor.top;
	let mut align = PopupAlign::Centered;

	if x + popup.width + POPUP_PADDING > viewport.width {
		x = anchor.left - popup.width - POPUP_GAP;
	}

	let half_height = popup.height / 2.0;
	if y - half_height < POPUP_PADDING {
		y = POPUP_PADDING;
		align = PopupAlign::Top;
	} else if y + half_height > viewport.height - POPUP_PADDING {
		y = viewport.height - popup.height - POPUP_PADDING;
		align = PopupAlign::Top;
	}

	PopupPosition { x, y, align }
}

#[cfg(test)]
mod tests {
	use super::*;

	/// The rectangle a popup of `size` occupies at `pos`.
	fn occupied(pos: PopupPosition, size: Size) -> Rect {
		let top = match pos.align {
			PopupAlign::Centered => pos.y - size.height / 2.0,
			PopupAlign::Top => pos.y,
		};
		Rect::from_origin(pos.x, top, size.width, size.height)
	}

	fn anchor(left: f64, top: f64) -> Rect {
		Rect::from_origin(left, top, 100.0, 60.0)
	}

	#[test]
	fn flips_left_and_pins_to_top() {
		let r = Rect {
			left: 400.0,
			top: 100.0,
			right: 500.0,
			bottom: 160.0,
		};
		let pos = place_popup(r, Size::new(300.0, 200.0), Size::new(800.0, 600.0));
		assert_eq!(pos.x, 90.0);
		assert_eq!(pos.y, 20.0);
		assert_eq!(pos.align, PopupAlign::Top);
	}

	#[test]
	fn stays_right_and_centered_when_there_is_room() {
		let pos = place_popup(anchor(100.0, 300.0), Size::new(300.0, 200.0), Size::new(1200.0, 800.0));
		assert_eq!(pos.x, 210.0);
		assert_eq!(pos.y, 300.0);
		assert_eq!(pos.align, PopupAlign::Centered);
		assert_eq!(occupied(pos, Size::new(300.0, 200.0)).top, 200.0);
	}

	#[test]
	fn pins_to_bottom_padding() {
		let pos = place_popup(anchor(100.0, 550.0), Size::new(300.0, 200.0), Size::new(1200.0, 600.0));
		assert_eq!(pos.y, 600.0 - 200.0 - POPUP_PADDING);
		assert_eq!(pos.align, PopupAlign::Top);
	}

	#[test]
	fn wide_popup_is_not_clamped_horizontally() {
		let pos = place_popup(anchor(50.0, 300.0), Size::new(900.0, 100.0), Size::new(800.0, 600.0));
		assert_eq!(pos.x, 50.0 - 900.0 - POPUP_GAP);
	}

	#[test]
	fn popup_stays_inside_viewport() {
		let viewport = Size::new(1024.0, 768.0);
		for popup in [Size::new(300.0, 200.0), Size::new(448.0, 400.0), Size::new(200.0, 700.0)] {
			for left in (0..=900).step_by(75) {
				for top in (0..=700).step_by(50) {
					let r = anchor(left as f64, top as f64);
					let placed = occupied(place_popup(r, popup, viewport), popup);
					assert!(placed.right <= viewport.width, "{r:?} {popup:?} -> {placed:?}");
					assert!(placed.bottom <= viewport.height, "{r:?} {popup:?} -> {placed:?}");
					assert!(placed.top >= 0.0, "{r:?} {popup:?} -> {placed:?}");
				}
			}
		}
	}

	#[test]
	fn same_inputs_same_output() {
		let (r, popup, viewport) = (anchor(700.0, 10.0), Size::new(320.0, 180.0), Size::new(900.0, 500.0));
		assert_eq!(place_popup(r, popup, viewport), place_popup(r, popup, viewport));
	}
}
