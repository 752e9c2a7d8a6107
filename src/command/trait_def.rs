// PlayerCommand trait definition

use crate::command::player::MusicPlayer;

/// Trait for undoable player operations
///
/// Every mutation of the MusicPlayer in the demonstration goes through a
/// command so the controller can unwind it later. Both `execute` and `undo`
/// are infallible: each returns the player's confirmation message.
///
/// Commands borrow the player per call; they never own it.
///
/// # Example
/// ```
/// use behavioral_patterns::command::player::MusicPlayer;
/// use behavioral_patterns::command::trait_def::PlayerCommand;
///
/// struct MuteCommand;
///
/// impl PlayerCommand for MuteCommand {
///     fn execute(&self, player: &mut MusicPlayer) -> String {
///         player.set_volume(0)
///     }
///
///     fn undo(&self, player: &mut MusicPlayer) -> String {
///         player.set_volume(50)
///     }
///
///     fn description(&self) -> String {
///         "Mute".to_string()
///     }
/// }
/// ```
pub trait PlayerCommand {
    /// Apply the command to the player
    fn execute(&self, player: &mut MusicPlayer) -> String;

    /// Reverse the command
    ///
    /// For volume commands this restores the volume captured when the
    /// command was built, not the value seen at execution time.
    fn undo(&self, player: &mut MusicPlayer) -> String;

    /// Human-readable description for history display
    fn description(&self) -> String;
}
