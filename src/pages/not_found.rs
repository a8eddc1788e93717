use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::chrome::Backdrop;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page not-found">
			<Backdrop />
			<main class="bio-card">
				<h1>"页面不存在"</h1>
				<A href="/" attr:class="link-primary">"返回首页"</A>
			</main>
		</div>
	}
}
