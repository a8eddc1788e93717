//! Static site content: relations, literary works and the relation graph.

pub(crate) mod graph;
mod relations;
mod works;

pub use graph::relation_graph;
pub use relations::RELATIONS;
pub use works::WORKS;

/// A person related to Su Dongpo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationRecord {
	pub id: u32,
	pub name: &'static str,
	/// Relation to Su Dongpo, e.g. 父亲 or 挚友.
	pub relation_label: &'static str,
	pub description: &'static str,
	pub achievements: Option<&'static str>,
	pub interaction: Option<&'static str>,
}

/// Literary form of a work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkCategory {
	Poem,
	Lyric,
	Prose,
}

impl WorkCategory {
	pub fn label(self) -> &'static str {
		match self {
			WorkCategory::Poem => "诗",
			WorkCategory::Lyric => "词",
			WorkCategory::Prose => "文",
		}
	}
}

/// A poem, lyric or prose piece shown in the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkRecord {
	pub id: u32,
	pub category: WorkCategory,
	pub title: &'static str,
	pub content: &'static str,
	pub description: &'static str,
}
