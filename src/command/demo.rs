// Command pattern demonstration
//
// Queues up play/volume/pause commands, then unwinds the whole history in
// LIFO order, finishing with one undo past the bottom of the stack.

use crate::command::commands::{PauseCommand, PlayCommand, SetVolumeCommand};
use crate::command::controller::MusicController;
use crate::command::player::MusicPlayer;

/// Compute the demonstration transcript without printing
pub fn lines() -> Vec<String> {
    let mut player = MusicPlayer::new();
    let mut controller = MusicController::new();

    let mut lines = Vec::new();
    lines.push(player.load_track("Midnight City"));

    // Both volume commands are built before anything executes, so each
    // captures the initial volume (50) as its undo target.
    let play = Box::new(PlayCommand);
    let volume_up = Box::new(SetVolumeCommand::new(&player, 75));
    let pause = Box::new(PauseCommand);
    let volume_down = Box::new(SetVolumeCommand::new(&player, 25));

    lines.push("Executing commands:".to_string());
    lines.push(controller.execute_command(play, &mut player));
    lines.push(controller.execute_command(volume_up, &mut player));
    lines.push(controller.execute_command(pause, &mut player));
    lines.push(controller.execute_command(volume_down, &mut player));

    lines.push(String::new());
    lines.push("Undoing commands:".to_string());
    while controller.can_undo() {
        lines.push(controller.undo_last(&mut player));
    }

    // One more undo past the empty stack: the sentinel, never a failure
    lines.push(controller.undo_last(&mut player));

    lines
}

/// Run the demonstration, printing each line
pub fn run() {
    for line in lines() {
        println!("{}", line);
    }
}
