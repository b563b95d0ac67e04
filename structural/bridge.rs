// Structural Pattern: Bridge
// Two hierarchies that vary independently: what is played (audio, video) and
// where it is played (Windows, macOS). Players hold a backend and delegate the
// low-level work to it.

use design_patterns::console;

// ============================================================================
// Implementation side
// ============================================================================

trait MediaPlayerImplementation {
    fn play_audio(&self) -> String;
    fn play_video(&self) -> String;
}

struct WindowsMediaPlayer;

impl MediaPlayerImplementation for WindowsMediaPlayer {
    fn play_audio(&self) -> String {
        "Playing audio on Windows media player".to_string()
    }

    fn play_video(&self) -> String {
        "Playing video on Windows media player".to_string()
    }
}

struct MacOsMediaPlayer;

impl MediaPlayerImplementation for MacOsMediaPlayer {
    fn play_audio(&self) -> String {
        "Playing audio on macOS media player".to_string()
    }

    fn play_video(&self) -> String {
        "Playing video on macOS media player".to_string()
    }
}

// ============================================================================
// Abstraction side
// ============================================================================

trait MediaPlayer {
    fn play_file(&self) -> String;
}

struct AudioPlayer {
    implementation: Box<dyn MediaPlayerImplementation>,
}

impl AudioPlayer {
    fn new(implementation: Box<dyn MediaPlayerImplementation>) -> Self {
        Self { implementation }
    }
}

impl MediaPlayer for AudioPlayer {
    fn play_file(&self) -> String {
        self.implementation.play_audio()
    }
}

struct VideoPlayer {
    implementation: Box<dyn MediaPlayerImplementation>,
}

impl VideoPlayer {
    fn new(implementation: Box<dyn MediaPlayerImplementation>) -> Self {
        Self { implementation }
    }
}

impl MediaPlayer for VideoPlayer {
    fn play_file(&self) -> String {
        self.implementation.play_video()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_on_windows() {
        let player = AudioPlayer::new(Box::new(WindowsMediaPlayer));
        assert_eq!(player.play_file(), "Playing audio on Windows media player");
    }

    #[test]
    fn test_video_on_macos() {
        let player = VideoPlayer::new(Box::new(MacOsMediaPlayer));
        assert_eq!(player.play_file(), "Playing video on macOS media player");
    }

    #[test]
    fn test_every_combination_is_distinct() {
        let players: Vec<Box<dyn MediaPlayer>> = vec![
            Box::new(AudioPlayer::new(Box::new(WindowsMediaPlayer))),
            Box::new(AudioPlayer::new(Box::new(MacOsMediaPlayer))),
            Box::new(VideoPlayer::new(Box::new(WindowsMediaPlayer))),
            Box::new(VideoPlayer::new(Box::new(MacOsMediaPlayer))),
        ];
        let mut lines: Vec<String> = players.iter().map(|p| p.play_file()).collect();
        lines.sort();
        lines.dedup();
        assert_eq!(lines.len(), 4);
    }
}

fn main() {
    console::banner("Bridge Pattern");

    let windows_audio_player = AudioPlayer::new(Box::new(WindowsMediaPlayer));
    console::outcome(windows_audio_player.play_file());

    let macos_video_player = VideoPlayer::new(Box::new(MacOsMediaPlayer));
    console::outcome(macos_video_player.play_file());

    console::step("Same abstraction, other backend");
    let macos_audio_player = AudioPlayer::new(Box::new(MacOsMediaPlayer));
    console::outcome(macos_audio_player.play_file());

    console::when_to_use("bridge");
}
