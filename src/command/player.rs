// MusicPlayer - the receiver mutated by commands

/// Lowest accepted volume
pub const MIN_VOLUME: i32 = 0;

/// Highest accepted volume
pub const MAX_VOLUME: i32 = 100;

/// Volume a freshly created player starts at
pub const DEFAULT_VOLUME: i32 = 50;

/// Music player receiver
///
/// Single source of truth for playback state. Commands call into these
/// methods and relay the returned confirmation messages to the caller;
/// nothing mutates the fields from outside.
pub struct MusicPlayer {
    is_playing: bool,
    volume: i32,
    current_track: Option<String>,
}

impl MusicPlayer {
    /// Create a stopped player at the default volume with no track loaded
    pub fn new() -> Self {
        Self {
            is_playing: false,
            volume: DEFAULT_VOLUME,
            current_track: None,
        }
    }

    /// Start playback
    pub fn play(&mut self) -> String {
        self.is_playing = true;
        format!("Playing music. Volume: {}", self.volume)
    }

    /// Pause playback
    pub fn pause(&mut self) -> String {
        self.is_playing = false;
        "Music paused".to_string()
    }

    /// Change the volume, clamped to [MIN_VOLUME, MAX_VOLUME]
    pub fn set_volume(&mut self, volume: i32) -> String {
        let old_volume = self.volume;
        self.volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
        format!("Volume changed from {} to {}", old_volume, self.volume)
    }

    /// Load a track without starting playback
    pub fn load_track(&mut self, title: impl Into<String>) -> String {
        let title = title.into();
        let message = format!("Loaded track: {}", title);
        self.current_track = Some(title);
        message
    }

    /// Check if the player is currently playing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Current volume, always in [MIN_VOLUME, MAX_VOLUME]
    pub fn volume(&self) -> i32 {
        self.volume
    }

    /// Title of the loaded track, if any
    pub fn current_track(&self) -> Option<&str> {
        self.current_track.as_deref()
    }
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self::new()
    }
}
