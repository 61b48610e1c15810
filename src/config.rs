use std::env;
use tracing::Level;

/// Runtime settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: Level,
    /// Answer given to the notification permission prompt
    pub notifications_granted: bool,
    pub seed_samples: bool,
    pub play_sound: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            notifications_granted: true,
            seed_samples: true,
            play_sound: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unknown or malformed values keep their default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_level = lookup("AGENDA_LOG_LEVEL")
            .and_then(|v| v.trim().parse::<Level>().ok())
            .unwrap_or(defaults.log_level);

        let notifications_granted = lookup("AGENDA_NOTIFICATIONS")
            .and_then(|v| parse_permission(&v))
            .unwrap_or(defaults.notifications_granted);

        Self {
            log_level,
            notifications_granted,
            seed_samples: lookup("AGENDA_SEED_SAMPLES")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.seed_samples),
            play_sound: lookup("AGENDA_SOUND")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.play_sound),
        }
    }
}

/// Permission answer: `granted`/`denied` or any boolean spelling
fn parse_permission(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "granted" | "grant" | "allow" => Some(true),
        "denied" | "deny" => Some(false),
        other => parse_bool(other),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
