use leptos::prelude::*;

use super::filter::{CategoryFilter, WorkFilter};
use crate::content::WorkRecord;

/// Filter buttons above a grid of work cards.
#[component]
pub fn WorkGallery(works: &'static [WorkRecord]) -> impl IntoView {
	let filter = RwSignal::new(WorkFilter::default());

	let buttons = CategoryFilter::ALL
		.into_iter()
		.map(|category| {
			view! {
				<button
					class="filter-button"
					class:active=move || filter.with(|f| f.selected() == category)
					on:click=move |_| filter.update(|f| f.set_category(category))
				>
					{category.label()}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="filter-bar">{buttons}</div>
		<div class="works-grid">
			<For
				each=move || filter.with(|f| f.visible_works(works))
				key=|work| work.id
				children=move |work: &'static WorkRecord| {
					view! {
						<article class="work-card">
							<header class="card-header">
								<h2>{work.title}</h2>
								<span class="badge">{work.category.label()}</span>
							</header>
							<pre class="work-content">{work.content}</pre>
							<p class="work-description">{work.description}</p>
						</article>
					}
				}
			/>
		</div>
	}
}
