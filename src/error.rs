use thiserror::Error;

/// Result alias for fallible site operations.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors raised by the site controllers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
	/// The media engine rejected a play or pause request.
	#[error("{0}")]
	MediaPlayback(String),

	#[error("graph node `{0}` is defined more than once")]
	DuplicateNode(String),

	#[error("relation graph has no center node")]
	MissingCenter,

	#[error("relation graph has more than one center node: `{0}` and `{1}`")]
	MultipleCenters(String, String),

	#[error("graph node `{0}` has no relation record")]
	UnmappedNode(String),

	#[error("graph node `{node}` refers to unknown relation record {relation_id}")]
	UnknownRelation { node: String, relation_id: u32 },

	#[error("edge `{edge}` refers to unknown node `{node}`")]
	DanglingEdge { edge: String, node: String },

	#[error("edge `{0}` does not connect the center node to a relation")]
	NotStar(String),

	#[error("node `{0}` is connected to the center more than once")]
	DuplicateEdge(String),

	#[error("node `{0}` is not connected to the center")]
	DisconnectedNode(String),
}

impl SiteError {
	/// Convert a rejected JS promise or thrown exception into a playback error.
	pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
		use wasm_bindgen::JsCast;

		let message = value
			.dyn_ref::<js_sys::Error>()
			.map(|e| String::from(e.message()))
			.or_else(|| value.as_string())
			.unwrap_or_else(|| "Failed to play audio".to_string());
		SiteError::MediaPlayback(message)
	}
}
