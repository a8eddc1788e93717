use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, MouseEvent};

use super::state::{MediaEvent, PlaybackRequest, PlaybackState};
use crate::error::{Result, SiteError};

async fn start_playback(audio: &HtmlAudioElement) -> Result<()> {
	let promise = audio.play().map_err(SiteError::from_js)?;
	JsFuture::from(promise).await.map_err(SiteError::from_js)?;
	Ok(())
}

const PLAY_ICON: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zM9.555 7.168A1 1 0 008 8v4a1 1 0 001.555.832l3-2a1 1 0 000-1.664l-3-2z";
const PAUSE_ICON: &str = "M18 10a8 8 0 11-16 0 8 8 0 0116 0zM7 8a1 1 0 012 0v4a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v4a1 1 0 102 0V8a1 1 0 00-1-1z";

/// Round play/pause button driving a hidden `<audio>` element.
#[component]
pub fn AudioToggle(#[prop(into)] src: String) -> impl IntoView {
	let audio_ref = NodeRef::<leptos::html::Audio>::new();
	let playback = RwSignal::new(PlaybackState::default());
	let apply = move |event: MediaEvent| playback.update(|s| s.apply(event));

	let on_error = move |_| {
		let message = audio_ref
			.get_untracked()
			.and_then(|audio| audio.error())
			.map(|e| e.message())
			.filter(|m| !m.is_empty())
			.unwrap_or_else(|| "Unknown error".to_string());
		apply(MediaEvent::Error(message));
	};

	let on_toggle = move |_: MouseEvent| {
		let Some(request) = playback.with_untracked(PlaybackState::toggle_request) else {
			return;
		};
		let Some(audio) = audio_ref.get_untracked() else {
			return;
		};
		match request {
			PlaybackRequest::Play => {
				info!("audio: attempting to play");
				spawn_local(async move {
					let result = start_playback(&audio).await;
					playback.update(|s| s.settle(request, result));
				});
			}
			PlaybackRequest::Pause => {
				info!("audio: attempting to pause");
				let result = audio.pause().map_err(SiteError::from_js);
				playback.update(|s| s.settle(request, result));
			}
		}
	};

	let icon = move || {
		if playback.with(PlaybackState::is_playing) {
			PAUSE_ICON
		} else {
			PLAY_ICON
		}
	};

	view! {
		<div class="audio-toggle">
			<audio
				node_ref=audio_ref
				src=src
				preload="auto"
				on:loadstart=move |_| apply(MediaEvent::LoadStart)
				on:canplay=move |_| apply(MediaEvent::CanPlay)
				on:waiting=move |_| apply(MediaEvent::Waiting)
				on:ended=move |_| apply(MediaEvent::Ended)
				on:error=on_error
				on:play=|_| debug!("audio: play event")
				on:pause=|_| debug!("audio: pause event")
			/>
			<button
				class="audio-button"
				class:ready=move || playback.with(PlaybackState::can_toggle)
				disabled=move || !playback.with(PlaybackState::can_toggle)
				title=move || playback.with(|s| s.title().to_string())
				on:click=on_toggle
			>
				<svg xmlns="http://www.w3.org/2000/svg" class="icon" viewBox="0 0 20 20" fill="currentColor">
					<path fill-rule="evenodd" clip-rule="evenodd" d=icon />
				</svg>
			</button>
			{move || {
				playback
					.with(|s| s.error().map(str::to_string))
					.map(|message| view! { <div class="audio-error">{message}</div> })
			}}
		</div>
	}
}
