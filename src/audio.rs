//! Sound playback
//!
//! Maps the simulation's signals to sound cues and plays them. Missing sound
//! files are logged once at startup and then silently skipped.

use macroquad::audio::{load_sound, play_sound, play_sound_once, stop_sound, PlaySoundParams, Sound};
use crate::config::AssetPaths;
use crate::game::GameEvent;

/// A single sound effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Jump,
    Grunt,
    Impact,
    Lose,
    Win,
}

/// Sound effects for a signal, in play order
pub fn cues_for(event: GameEvent) -> &'static [Cue] {
    match event {
        GameEvent::Jumped => &[Cue::Jump],
        GameEvent::Collided => &[Cue::Grunt, Cue::Impact, Cue::Lose],
        GameEvent::Won => &[Cue::Win],
        GameEvent::RoundReset => &[],
    }
}

async fn load_optional(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => {
            tracing::info!("Loaded sound {}", path);
            Some(sound)
        }
        Err(e) => {
            tracing::warn!("Failed to load sound {}: {}", path, e);
            None
        }
    }
}

pub struct AudioBank {
    music: Option<Sound>,
    jump: Option<Sound>,
    grunt: Option<Sound>,
    impact: Option<Sound>,
    lose: Option<Sound>,
    win: Option<Sound>,
}

impl AudioBank {
    pub async fn load(paths: &AssetPaths) -> Self {
        Self {
            music: load_optional(&paths.music).await,
            jump: load_optional(&paths.jump).await,
            grunt: load_optional(&paths.grunt).await,
            impact: load_optional(&paths.impact).await,
            lose: load_optional(&paths.lose).await,
            win: load_optional(&paths.win).await,
        }
    }

    /// Loop the background music
    pub fn start_music(&self, volume: f32) {
        if let Some(music) = &self.music {
            play_sound(music, PlaySoundParams { looped: true, volume });
        }
    }

    fn sound(&self, cue: Cue) -> Option<&Sound> {
        match cue {
            Cue::Jump => self.jump.as_ref(),
            Cue::Grunt => self.grunt.as_ref(),
            Cue::Impact => self.impact.as_ref(),
            Cue::Lose => self.lose.as_ref(),
            Cue::Win => self.win.as_ref(),
        }
    }

    /// Play the cues for every signal raised this frame
    pub fn play_events(&self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            for cue in cues_for(event) {
                if let Some(sound) = self.sound(*cue) {
                    play_sound_once(sound);
                }
            }
        }
    }
}

impl Drop for AudioBank {
    fn drop(&mut self) {
        if let Some(music) = &self.music {
            stop_sound(music);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_plays_three_cues() {
        assert_eq!(cues_for(GameEvent::Collided), &[Cue::Grunt, Cue::Impact, Cue::Lose]);
    }

    #[test]
    fn test_reset_is_silent() {
        assert!(cues_for(GameEvent::RoundReset).is_empty());
        assert_eq!(cues_for(GameEvent::Jumped), &[Cue::Jump]);
        assert_eq!(cues_for(GameEvent::Won), &[Cue::Win]);
    }
}
