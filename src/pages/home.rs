use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::audio_toggle::AudioToggle;
use crate::components::chrome::Backdrop;
use crate::config::{BACKGROUND_MUSIC, PORTRAIT_IMAGE};

/// Biography landing page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="home">
			<Backdrop />
			<div class="music-player">
				<AudioToggle src=BACKGROUND_MUSIC />
			</div>

			<main class="bio-card">
				<div class="portrait">
					<img src=PORTRAIT_IMAGE alt="Profile picture" />
				</div>
				<h1>"苏东坡"</h1>
				<h2>"北宋文学家、政治家"</h2>
				<p class="bio">
					"苏轼（1037年1月8日－1101年8月24日），字子瞻，号东坡居士，世称苏东坡。
					眉州眉山（今四川省眉山市）人，北宋时期文学家、政治家。
					苏轼是北宋中期最杰出的文学家，在诗、词、散文、书法、绘画等方面都有极高的造诣。"
				</p>
				<nav class="bio-links">
					<A href="/works" attr:class="link-primary">"了解更多"</A>
					<A href="/works" attr:class="link-outline">"作品集"</A>
					<A href="/relations" attr:class="link-outline">"亲朋"</A>
				</nav>
			</main>
		</div>
	}
}
