// MusicController - records executed commands and unwinds them

use crate::command::player::MusicPlayer;
use crate::command::trait_def::PlayerCommand;

/// Sentinel returned when undo is requested on an empty history
pub const NOTHING_TO_UNDO: &str = "No commands to undo";

/// Invoker that executes commands and keeps their history
///
/// The controller exclusively owns the history stack. Commands are pushed
/// when executed and popped when undone; there is no redo timeline.
pub struct MusicController {
    history: Vec<Box<dyn PlayerCommand>>,
}

impl MusicController {
    /// Create a controller with an empty history
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Execute a command and record it
    ///
    /// The command is appended to the history before it runs, so the stack
    /// always reflects the issued order.
    pub fn execute_command(
        &mut self,
        command: Box<dyn PlayerCommand>,
        player: &mut MusicPlayer,
    ) -> String {
        self.history.push(command);
        self.history
            .last()
            .map(|command| command.execute(player))
            .unwrap_or_default()
    }

    /// Undo the most recent command
    ///
    /// Pops the last command and returns its undo message. On an empty
    /// history this returns the sentinel and leaves the player untouched.
    /// Never fails.
    pub fn undo_last(&mut self, player: &mut MusicPlayer) -> String {
        match self.history.pop() {
            Some(command) => command.undo(player),
            None => NOTHING_TO_UNDO.to_string(),
        }
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of commands currently in the history
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Description of the command that would be undone next
    pub fn undo_description(&self) -> Option<String> {
        self.history.last().map(|command| command.description())
    }

    /// Drop all recorded history without touching the player
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for MusicController {
    fn default() -> Self {
        Self::new()
    }
}
