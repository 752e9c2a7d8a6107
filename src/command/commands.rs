// Concrete command implementations

use crate::command::player::MusicPlayer;
use crate::command::trait_def::PlayerCommand;

/// Command to start playback
///
/// Undo maps to pause. Play/Pause are each other's fixed inverse rather
/// than restoring a captured prior state, unlike SetVolumeCommand.
pub struct PlayCommand;

impl PlayerCommand for PlayCommand {
    fn execute(&self, player: &mut MusicPlayer) -> String {
        player.play()
    }

    fn undo(&self, player: &mut MusicPlayer) -> String {
        player.pause()
    }

    fn description(&self) -> String {
        "Play".to_string()
    }
}

/// Command to pause playback
pub struct PauseCommand;

impl PlayerCommand for PauseCommand {
    fn execute(&self, player: &mut MusicPlayer) -> String {
        player.pause()
    }

    fn undo(&self, player: &mut MusicPlayer) -> String {
        player.play()
    }

    fn description(&self) -> String {
        "Pause".to_string()
    }
}

/// Command to change the player volume
///
/// The previous volume is captured when the command is built. Undo restores
/// that captured value, regardless of any volume changes other commands made
/// between construction and undo.
pub struct SetVolumeCommand {
    new_volume: i32,
    prev_volume: i32,
}

impl SetVolumeCommand {
    /// Create a new SetVolumeCommand, capturing the player's current volume
    /// as the undo target
    ///
    /// # Arguments
    /// * `player` - The player whose volume is captured for undo
    /// * `volume` - The new volume value (clamped on execution)
    pub fn new(player: &MusicPlayer, volume: i32) -> Self {
        Self {
            new_volume: volume,
            prev_volume: player.volume(),
        }
    }
}

impl PlayerCommand for SetVolumeCommand {
    fn execute(&self, player: &mut MusicPlayer) -> String {
        player.set_volume(self.new_volume)
    }

    fn undo(&self, player: &mut MusicPlayer) -> String {
        player.set_volume(self.prev_volume)
    }

    fn description(&self) -> String {
        format!("Set Volume to {}", self.new_volume)
    }
}
