//! Backdrop and header shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::BACKGROUND_IMAGE;

const BACK_ARROW: &str = "M10 19l-7-7m0 0l7-7m-7 7h18";

/// Landscape painting behind the page, dimmed by an overlay.
#[component]
pub fn Backdrop() -> impl IntoView {
	view! {
		<div class="backdrop">
			<img src=BACKGROUND_IMAGE alt="Chinese landscape background" />
			<div class="backdrop-shade"></div>
		</div>
	}
}

/// Title bar with a link back to the biography page.
#[component]
pub fn PageHeader(title: &'static str) -> impl IntoView {
	view! {
		<div class="page-header">
			<A href="/" attr:class="back-link">
				<svg
					xmlns="http://www.w3.org/2000/svg"
					class="icon"
					fill="none"
					viewBox="0 0 24 24"
					stroke="currentColor"
				>
					<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=BACK_ARROW />
				</svg>
			</A>
			<h1>{title}</h1>
			<div class="header-spacer"></div>
		</div>
	}
}
