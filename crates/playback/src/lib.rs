//! Playback widget state machine
//!
//! Models the play/pause/seek/volume state of an audio widget as an
//! explicit state machine decoupled from any rendering technology. The
//! widget owns one [`PlaybackState`], feeds it [`PlaybackEvent`]s (user
//! controls and media-element events), and executes whatever
//! [`MediaCommand`] comes back against the actual media element. The
//! machine itself never touches buffering, decoding, or timing.

use serde::{Deserialize, Serialize};

/// State owned by a single playback widget instance
///
/// Mutated only through [`PlaybackState::apply`]; discarded with the
/// widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// Playhead position in seconds
    pub current_time: f64,
    /// Clip length in seconds, 0 until metadata is known
    pub duration: f64,
    /// Volume in [0, 1]; preserved across mute so unmute can restore it
    pub volume: f64,
    pub is_muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            is_muted: false,
        }
    }
}

/// Events driving the state machine
///
/// User controls and media-element notifications share one event type so
/// the widget has a single update path.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// User pressed the play/pause control
    TogglePlay,
    /// The media element rejected a play request (e.g. decoding error)
    PlayFailed(String),
    /// End of stream reached
    Ended,
    /// User moved the seek control (seconds)
    Seek(f64),
    /// Media metadata became available
    MetadataLoaded { duration: f64 },
    /// Periodic playhead update from the media element
    TimeUpdate(f64),
    /// User moved the volume control
    SetVolume(f64),
    /// User pressed the mute control
    ToggleMute,
    /// User pressed the download control
    Download,
}

/// Side effects the widget must run against the media element
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Play,
    Pause,
    /// Move the media playhead (seconds)
    Seek(f64),
    /// Set the media element volume (already reflects mute)
    SetVolume(f64),
    /// Save the current audio source as a file
    SaveFile,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, returning the command to run (if any)
    ///
    /// Play failures are logged and leave the machine paused; they are
    /// not surfaced to the user.
    pub fn apply(&mut self, event: PlaybackEvent) -> Option<MediaCommand> {
        match event {
            PlaybackEvent::TogglePlay => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    Some(MediaCommand::Play)
                } else {
                    Some(MediaCommand::Pause)
                }
            }
            PlaybackEvent::PlayFailed(reason) => {
                tracing::warn!(%reason, "media play request failed");
                self.is_playing = false;
                None
            }
            PlaybackEvent::Ended => {
                self.is_playing = false;
                None
            }
            PlaybackEvent::Seek(secs) => {
                let secs = secs.clamp(0.0, self.duration.max(0.0));
                self.current_time = secs;
                Some(MediaCommand::Seek(secs))
            }
            PlaybackEvent::MetadataLoaded { duration } => {
                self.duration = duration.max(0.0);
                None
            }
            PlaybackEvent::TimeUpdate(secs) => {
                self.current_time = secs;
                None
            }
            PlaybackEvent::SetVolume(volume) => {
                let volume = volume.clamp(0.0, 1.0);
                self.volume = volume;
                // Silence implies mute; any audible volume unmutes
                self.is_muted = volume == 0.0;
                Some(MediaCommand::SetVolume(volume))
            }
            PlaybackEvent::ToggleMute => {
                if self.is_muted {
                    self.is_muted = false;
                    Some(MediaCommand::SetVolume(self.volume))
                } else {
                    self.is_muted = true;
                    // Keep `volume` so unmute restores the prior level
                    Some(MediaCommand::SetVolume(0.0))
                }
            }
            PlaybackEvent::Download => Some(MediaCommand::SaveFile),
        }
    }
}
