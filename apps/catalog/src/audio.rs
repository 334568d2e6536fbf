use crate::config::AudioConfig;
use crate::error::AudioError;

/// Playback backend for the background track.
pub trait AudioPlayer {
    fn set_looping(&mut self, looping: bool);
    fn set_volume(&mut self, volume: f64);
    fn play(&mut self) -> Result<(), AudioError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioState {
    Armed,
    Started,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Started,
    Ignored,
}

/// Background music that starts on the first page click and never again.
#[derive(Debug)]
pub struct AmbientAudio<P> {
    player: P,
    state: AudioState,
}

impl<P: AudioPlayer> AmbientAudio<P> {
    /// Configure looping and volume without starting playback.
    pub fn prepare(mut player: P, config: &AudioConfig) -> Self {
        player.set_looping(config.looped);
        player.set_volume(config.volume.clamp(0.0, 1.0));
        Self {
            player,
            state: AudioState::Armed,
        }
    }

    pub const fn state(&self) -> AudioState {
        self.state
    }

    pub const fn player(&self) -> &P {
        &self.player
    }

    /// Playback failures are logged and never reach the display region.
    pub fn on_click(&mut self) -> ClickOutcome {
        if self.state == AudioState::Started {
            return ClickOutcome::Ignored;
        }

        self.state = AudioState::Started;
        if let Err(error) = self.player.play() {
            tracing::warn!(%error, "background music did not start");
        }
        ClickOutcome::Started
    }
}
