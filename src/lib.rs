// Behavioral Patterns - Library exports for tests and demo binaries

pub mod command;
pub mod report;
pub mod state;

// Re-export commonly used types for convenience
pub use command::{
    MusicController, MusicPlayer, PauseCommand, PlayCommand, PlayerCommand, SetVolumeCommand,
};
pub use report::{FieldValue, HrReport, InventoryReport, Record, Report, ReportError, SalesReport};
pub use state::{Character, Stance};
