// State Pattern for the game character demonstration
//
// The character's behavior is decided entirely by its current stance. The
// stances carry no data of their own, so they are modeled as a plain enum
// with match-based behavior methods rather than trait objects.
//
// Transitions are unconditional: any stance is reachable from any other,
// and changing stance always succeeds.

pub mod character;
pub mod demo;
pub mod stance;

pub use character::Character;
pub use stance::Stance;
