use leptos::prelude::*;

use crate::components::chrome::{Backdrop, PageHeader};
use crate::components::work_gallery::WorkGallery;
use crate::content::WORKS;

#[component]
pub fn Works() -> impl IntoView {
	view! {
		<div class="page">
			<Backdrop />
			<div class="container">
				<PageHeader title="苏东坡作品集" />
				<WorkGallery works=WORKS />
			</div>
		</div>
	}
}
