//! Compile-time site configuration: asset paths and graph view options.

/// Full-page background painting.
pub const BACKGROUND_IMAGE: &str = "/background.png";
/// Portrait on the biography page.
pub const PORTRAIT_IMAGE: &str = "/Su_shi.jpg";
/// Background music toggled from the biography page.
pub const BACKGROUND_MUSIC: &str = "/background-music.mp3";

/// Viewport behaviour of the relation graph canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphViewConfig {
	pub min_zoom: f64,
	pub max_zoom: f64,
	/// Fraction of the graph extent kept free around it on fit-view.
	pub fit_padding: f64,
	/// Multiplicative zoom applied per wheel notch or control click.
	pub zoom_step: f64,
	/// Pointer travel (screen px) below which a press counts as a click.
	pub click_tolerance: f64,
	/// Spacing of the dotted background grid in graph units.
	pub grid_gap: f64,
	pub minimap: bool,
}

impl Default for GraphViewConfig {
	fn default() -> Self {
		Self {
			min_zoom: 0.5,
			max_zoom: 1.5,
			fit_padding: 0.2,
			zoom_step: 1.2,
			click_tolerance: 4.0,
			grid_gap: 20.0,
			minimap: true,
		}
	}
}

impl GraphViewConfig {
	pub fn clamp_zoom(&self, k: f64) -> f64 {
		k.clamp(self.min_zoom, self.max_zoom)
	}
}
