//! CLI-specific configuration for terminal UI.
use std::env;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface, separate from
/// the game configuration loaded with the content.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Log sub-directory name. Generated from the clock when unset.
    pub session_id: Option<String>,
    /// Period of the frame loop.
    pub frame_interval: Duration,
    /// How long an arrow key counts as held after its last press or repeat.
    pub key_hold: Duration,
    pub ui: UiConfig,
}

impl CliConfig {
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
    pub const DEFAULT_KEY_HOLD_MS: u64 = 120;

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ADVENTURE_SESSION_ID` - Log session name (default: `session_<unix time>`)
    /// - `CLI_FRAME_INTERVAL_MS` - Frame period in milliseconds (default: 16)
    /// - `CLI_KEY_HOLD_MS` - Arrow key hold decay in milliseconds (default: 120)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.session_id = env::var("ADVENTURE_SESSION_ID")
            .ok()
            .filter(|id| !id.is_empty());

        if let Some(ms) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.frame_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = read_env::<u64>("CLI_KEY_HOLD_MS") {
            config.key_hold = Duration::from_millis(ms);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            frame_interval: Duration::from_millis(Self::DEFAULT_FRAME_INTERVAL_MS),
            key_hold: Duration::from_millis(Self::DEFAULT_KEY_HOLD_MS),
            ui: UiConfig::default(),
        }
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the status bar in lines. Hidden in fullscreen mode.
    pub status_bar_height: u16,
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_bar_height: 1,
            title: " Sweetfield ".to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
