//! Sound service for the presentation layer
//!
//! The simulation never plays sound. The host feeds game events into an
//! [`AudioManager`], which maps them to cues and forwards them to a platform
//! [`SoundBackend`]. Backend failures disable audio and are logged; they never
//! reach the game state.

use thiserror::Error;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Session started
    Start,
    /// Looping background track
    BackgroundMusic,
    /// Plane hit by a missile
    Collision,
    /// Played after the collision sting
    GameOver,
    /// Score milestone reached
    Score,
    /// Level increased
    LevelUp,
}

/// Backend failure
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Failed to initialize audio: {0}")]
    Init(String),
    #[error("Failed to play {effect:?}: {reason}")]
    Playback { effect: SoundEffect, reason: String },
}

/// Platform audio implementation
pub trait SoundBackend {
    /// Load sounds and open the output device
    fn init(&mut self) -> Result<(), AudioError>;
    /// Play a cue at the given volume and pitch
    fn play(&mut self, effect: SoundEffect, volume: f32, pitch: f32) -> Result<(), AudioError>;
    /// Stop the looping background track
    fn stop_music(&mut self);
    /// Release all resources
    fn dispose(&mut self);
}

/// Map a game event to the cues it should trigger
pub fn effects_for(event: &GameEvent) -> &'static [SoundEffect] {
    match event {
        GameEvent::Collision { .. } => &[SoundEffect::Collision, SoundEffect::GameOver],
        GameEvent::ScoreMilestone { .. } => &[SoundEffect::Score],
        GameEvent::LevelUp { .. } => &[SoundEffect::LevelUp],
    }
}

/// Audio manager for the game
pub struct AudioManager<B: SoundBackend> {
    backend: Option<B>,
    master_volume: f32,
    sfx_volume: f32,
    /// Difficulty-specific pitch shift
    pitch: f32,
    muted: bool,
}

impl<B: SoundBackend> AudioManager<B> {
    /// Initialize the backend; on failure audio stays disabled
    pub fn new(mut backend: B) -> Self {
        let backend = match backend.init() {
            Ok(()) => Some(backend),
            Err(e) => {
                log::warn!("{e} - audio disabled");
                None
            }
        };
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            pitch: 1.0,
            muted: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.max(0.1);
    }

    /// Mute/unmute all audio; muting also stops the music
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.stop_music();
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let pitch = self.pitch;
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if let Err(e) = backend.play(effect, vol, pitch) {
            log::warn!("{e}");
        }
    }

    /// Session start cue plus background music
    pub fn on_start(&mut self) {
        self.play(SoundEffect::Start);
        self.play(SoundEffect::BackgroundMusic);
    }

    /// Play the cues for a batch of events; collision also stops the music
    pub fn on_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if matches!(event, GameEvent::Collision { .. }) {
                self.stop_music();
            }
            for &effect in effects_for(event) {
                self.play(effect);
            }
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.stop_music();
        }
    }

    /// Release the backend; further calls are silent
    pub fn dispose(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            backend.dispose();
        }
    }
}

/// Backend that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogBackend {
    pub played: Vec<SoundEffect>,
}

impl SoundBackend for LogBackend {
    fn init(&mut self) -> Result<(), AudioError> {
        log::debug!("Log audio backend ready");
        Ok(())
    }

    fn play(&mut self, effect: SoundEffect, volume: f32, pitch: f32) -> Result<(), AudioError> {
        log::debug!("Sound {:?} (vol {:.2}, pitch {:.2})", effect, volume, pitch);
        self.played.push(effect);
        Ok(())
    }

    fn stop_music(&mut self) {
        log::debug!("Music stopped");
    }

    fn dispose(&mut self) {
        self.played.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records calls into a shared log so tests can inspect after moves
    #[derive(Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<String>>>,
        fail_init: bool,
        fail_play: bool,
    }

    impl SoundBackend for Recorder {
        fn init(&mut self) -> Result<(), AudioError> {
            if self.fail_init {
                return Err(AudioError::Init("no device".into()));
            }
            Ok(())
        }

        fn play(&mut self, effect: SoundEffect, _volume: f32, _pitch: f32) -> Result<(), AudioError> {
            self.calls.borrow_mut().push(format!("{effect:?}"));
            if self.fail_play {
                return Err(AudioError::Playback {
                    effect,
                    reason: "busy".into(),
                });
            }
            Ok(())
        }

        fn stop_music(&mut self) {
            self.calls.borrow_mut().push("stop".into());
        }

        fn dispose(&mut self) {
            self.calls.borrow_mut().push("dispose".into());
        }
    }

    #[test]
    fn test_collision_plays_sting_and_stops_music() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut audio = AudioManager::new(Recorder {
            calls: calls.clone(),
            ..Default::default()
        });
        audio.on_events(&[
            GameEvent::ScoreMilestone { score: 100 },
            GameEvent::Collision { missile_id: 3 },
        ]);
        assert_eq!(
            *calls.borrow(),
            vec!["Score", "stop", "Collision", "GameOver"]
        );
    }

    #[test]
    fn test_init_failure_disables_audio() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut audio = AudioManager::new(Recorder {
            calls: calls.clone(),
            fail_init: true,
            ..Default::default()
        });
        assert!(!audio.is_enabled());
        audio.on_start();
        audio.dispose();
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_playback_failure_is_swallowed() {
        let mut audio = AudioManager::new(Recorder {
            fail_play: true,
            ..Default::default()
        });
        audio.on_events(&[GameEvent::LevelUp { level: 2 }]);
        assert!(audio.is_enabled());
    }

    #[test]
    fn test_muted_is_silent() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut audio = AudioManager::new(Recorder {
            calls: calls.clone(),
            ..Default::default()
        });
        audio.set_muted(true);
        audio.on_start();
        assert_eq!(*calls.borrow(), vec!["stop"]);
    }

    #[test]
    fn test_dispose_once() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut audio = AudioManager::new(Recorder {
            calls: calls.clone(),
            ..Default::default()
        });
        audio.dispose();
        audio.dispose();
        audio.play(SoundEffect::Score);
        assert_eq!(*calls.borrow(), vec!["dispose"]);
    }
}
