// Command Pattern for the music player demonstration
//
// All mutations of the MusicPlayer go through PlayerCommand objects so the
// controller can undo them in LIFO order.
//
// Architecture:
// - PlayerCommand trait: defines execute(), undo(), description()
// - MusicController: records executed commands and unwinds them
// - Concrete commands: PlayCommand, PauseCommand, SetVolumeCommand
//
// Commands borrow the player for the duration of a call and never own it;
// the controller exclusively owns the history stack.

pub mod commands;
pub mod controller;
pub mod demo;
pub mod player;
pub mod trait_def;

pub use commands::{PauseCommand, PlayCommand, SetVolumeCommand};
pub use controller::MusicController;
pub use player::MusicPlayer;
pub use trait_def::PlayerCommand;
