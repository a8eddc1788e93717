use crate::content::{WorkCategory, WorkRecord};

/// Category selection of the works gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
	#[default]
	All,
	Only(WorkCategory),
}

impl CategoryFilter {
	/// Every selectable value, in button order.
	pub const ALL: [CategoryFilter; 4] = [
		CategoryFilter::All,
		CategoryFilter::Only(WorkCategory::Poem),
		CategoryFilter::Only(WorkCategory::Lyric),
		CategoryFilter::Only(WorkCategory::Prose),
	];

	pub fn label(self) -> &'static str {
		match self {
			CategoryFilter::All => "全部",
			CategoryFilter::Only(category) => category.label(),
		}
	}

	pub fn matches(self, work: &WorkRecord) -> bool {
		match self {
			CategoryFilter::All => true,
			CategoryFilter::Only(category) => work.category == category,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkFilter {
	selected: CategoryFilter,
}

impl WorkFilter {
	pub fn selected(&self) -> CategoryFilter {
		self.selected
	}

	pub fn set_category(&mut self, category: CategoryFilter) {
		self.selected = category;
	}

	/// Works matching the selection, in store order.
	pub fn visible_works(&self, works: &'static [WorkRecord]) -> Vec<&'static WorkRecord> {
		works.iter().filter(|w| self.selected.matches(w)).collect()
	}
}
