use log::{info, warn};

use crate::error::SiteError;

/// Playback lifecycle of the background audio element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
	#[default]
	Idle,
	/// Fetching or buffering. `resume` is set when playback was running
	/// before the stall, so the next `CanPlay` goes back to `Playing`.
	Loading {
		resume: bool,
	},
	Ready,
	Playing,
	Paused,
	Errored(String),
}

/// Media element events the toggle reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaEvent {
	LoadStart,
	CanPlay,
	Waiting,
	Ended,
	Error(String),
}

/// Request issued to the media element by a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackRequest {
	Play,
	Pause,
}

impl PlaybackState {
	pub fn is_playing(&self) -> bool {
		matches!(self, PlaybackState::Playing | PlaybackState::Loading { resume: true })
	}

	pub fn can_toggle(&self) -> bool {
		matches!(
			self,
			PlaybackState::Ready | PlaybackState::Paused | PlaybackState::Playing
		)
	}

	pub fn error(&self) -> Option<&str> {
		match self {
			PlaybackState::Errored(message) => Some(message.as_str()),
			_ => None,
		}
	}

	/// Tooltip for the toggle button.
	pub fn title(&self) -> &str {
		match self {
			PlaybackState::Errored(message) => message,
			PlaybackState::Playing => "暂停",
			PlaybackState::Ready | PlaybackState::Paused => "播放",
			PlaybackState::Idle | PlaybackState::Loading { .. } => "加载中...",
		}
	}

	fn transition(&mut self, next: PlaybackState, cause: &str) {
		if *self == next {
			return;
		}
		match &next {
			PlaybackState::Errored(message) => warn!("audio: {cause}: {self:?} -> error: {message}"),
			_ => info!("audio: {cause}: {self:?} -> {next:?}"),
		}
		*self = next;
	}

	pub fn apply(&mut self, event: MediaEvent) {
		let next = match (&*self, event) {
			(_, MediaEvent::LoadStart) => PlaybackState::Loading { resume: false },
			(PlaybackState::Playing | PlaybackState::Loading { resume: true }, MediaEvent::CanPlay) => {
				PlaybackState::Playing
			}
			(_, MediaEvent::CanPlay) => PlaybackState::Ready,
			(PlaybackState::Ready, MediaEvent::Waiting) => PlaybackState::Loading { resume: false },
			(PlaybackState::Playing, MediaEvent::Waiting) => PlaybackState::Loading { resume: true },
			(PlaybackState::Playing | PlaybackState::Loading { resume: true }, MediaEvent::Ended) => {
				PlaybackState::Paused
			}
			(_, MediaEvent::Error(message)) => PlaybackState::Errored(message),
			(current, MediaEvent::Waiting | MediaEvent::Ended) => current.clone(),
		};
		self.transition(next, "media event");
	}

	/// The request a toggle should issue, if toggling is possible now.
	pub fn toggle_request(&self) -> Option<PlaybackRequest> {
		match self {
			PlaybackState::Ready | PlaybackState::Paused => Some(PlaybackRequest::Play),
			PlaybackState::Playing => Some(PlaybackRequest::Pause),
			_ => None,
		}
	}

	/// Apply the outcome of a play or pause request.
	pub fn settle(&mut self, request: PlaybackRequest, result: Result<(), SiteError>) {
		let next = match (request, result) {
			(PlaybackRequest::Play, Ok(())) => PlaybackState::Playing,
			(PlaybackRequest::Pause, Ok(())) => PlaybackState::Paused,
			(_, Err(err)) => PlaybackState::Errored(err.to_string()),
		};
		self.transition(next, "toggle");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ready() -> PlaybackState {
		let mut state = PlaybackState::default();
		state.apply(MediaEvent::LoadStart);
		state.apply(MediaEvent::CanPlay);
		state
	}

	#[test]
	fn loads_then_becomes_ready() {
		let mut state = PlaybackState::default();
		assert_eq!(state.toggle_request(), None);
		state.apply(MediaEvent::LoadStart);
		assert_eq!(state, PlaybackState::Loading { resume: false });
		assert!(!state.can_toggle());
		state.apply(MediaEvent::CanPlay);
		assert_eq!(state, PlaybackState::Ready);
		assert_eq!(state.title(), "播放");
	}

	#[test]
	fn toggle_plays_and_pauses() {
		let mut state = ready();
		let request = state.toggle_request().unwrap();
		assert_eq!(request, PlaybackRequest::Play);
		state.settle(request, Ok(()));
		assert!(state.is_playing());
		assert_eq!(state.title(), "暂停");

		let request = state.toggle_request().unwrap();
		assert_eq!(request, PlaybackRequest::Pause);
		state.settle(request, Ok(()));
		assert_eq!(state, PlaybackState::Paused);
		assert_eq!(state.toggle_request(), Some(PlaybackRequest::Play));
	}

	#[test]
	fn rejected_play_surfaces_the_message() {
		let mut state = ready();
		state.settle(
			PlaybackRequest::Play,
			Err(SiteError::MediaPlayback("NotAllowedError".into())),
		);
		assert_eq!(state.error(), Some("NotAllowedError"));
		assert_eq!(state.title(), "NotAllowedError");
		assert!(!state.can_toggle());
	}

	#[test]
	fn errored_stays_inert_until_ready_again() {
		let mut state = ready();
		state.apply(MediaEvent::Error("decode failed".into()));
		assert_eq!(state.toggle_request(), None);
		state.apply(MediaEvent::Waiting);
		state.apply(MediaEvent::Ended);
		assert_eq!(state.toggle_request(), None);

		state.apply(MediaEvent::CanPlay);
		assert_eq!(state, PlaybackState::Ready);
		assert_eq!(state.error(), None);
		assert_eq!(state.toggle_request(), Some(PlaybackRequest::Play));
	}

	#[test]
	fn buffering_and_end_of_media() {
		let mut state = ready();
		state.settle(PlaybackRequest::Play, Ok(()));
		state.apply(MediaEvent::CanPlay);
		assert!(state.is_playing());
		state.apply(MediaEvent::Waiting);
		assert_eq!(state, PlaybackState::Loading { resume: true });
		assert_eq!(state.toggle_request(), None);

		let mut state = ready();
		state.settle(PlaybackRequest::Play, Ok(()));
		state.apply(MediaEvent::Ended);
		assert_eq!(state, PlaybackState::Paused);

		state.apply(MediaEvent::Waiting);
		assert_eq!(state, PlaybackState::Paused);
	}

	#[test]
	fn waiting_then_canplay_resumes_playing() {
		let mut state = ready();
		state.settle(PlaybackRequest::Play, Ok(()));
		state.apply(MediaEvent::Waiting);
		assert!(state.is_playing());
		assert!(!state.can_toggle());
		assert_eq!(state.title(), "加载中...");

		state.apply(MediaEvent::CanPlay);
		assert_eq!(state, PlaybackState::Playing);
		assert_eq!(state.toggle_request(), Some(PlaybackRequest::Pause));
	}

	#[test]
	fn waiting_while_ready_returns_to_ready() {
		let mut state = ready();
		state.apply(MediaEvent::Waiting);
		assert_eq!(state, PlaybackState::Loading { resume: false });
		assert!(!state.is_playing());
		state.apply(MediaEvent::CanPlay);
		assert_eq!(state, PlaybackState::Ready);
		assert_eq!(state.toggle_request(), Some(PlaybackRequest::Play));
	}

	#[test]
	fn stream_ending_during_stall_pauses() {
		let mut state = ready();
		state.settle(PlaybackRequest::Play, Ok(()));
		state.apply(MediaEvent::Waiting);
		state.apply(MediaEvent::Ended);
		assert_eq!(state, PlaybackState::Paused);
	}
}
