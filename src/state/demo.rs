// State pattern demonstration
//
// Walks one character through all four stances, showing each stance's
// behavior table.

use crate::state::character::Character;
use crate::state::stance::Stance;

/// Compute the demonstration transcript without printing
pub fn lines() -> Vec<String> {
    let mut character = Character::new();
    let mut lines = Vec::new();

    lines.push("Normal state:".to_string());
    lines.push(character.move_action().to_string());
    lines.push(character.attack().to_string());
    lines.push(character.receive_damage().to_string());

    for stance in [Stance::Powered, Stance::Injured, Stance::Immune] {
        lines.push(String::new());
        lines.push(format!("Changing to {} state:", stance));
        lines.push(character.change_stance(stance));
        lines.push(character.move_action().to_string());
        lines.push(character.attack().to_string());
        lines.push(character.receive_damage().to_string());
    }

    lines
}

/// Run the demonstration, printing each line
pub fn run() {
    for line in lines() {
        println!("{}", line);
    }
}
