// src/constants.rs
//
// Application-wide constants shared between the infrastructure adapters and
// the command dispatch.

/// File name of the durable note slot inside the data directory.
///
/// Holds the full note list as one JSON array and is rewritten in full on
/// every board mutation.
///
/// Used in: `infrastructure/json_store.rs`
pub const NOTES_FILE: &str = "notes.json";

/// File name of the stored session inside the data directory.
///
/// Present while logged in, removed on logout.
///
/// Used in: `infrastructure/session_file.rs`
pub const SESSION_FILE: &str = "session.json";

/// File name of the TOML configuration inside the data directory.
///
/// Used in: `lib.rs`, `infrastructure/config.rs`
pub const CONFIG_FILE: &str = "config.toml";

/// Widget-local message shown when the weather lookup fails for any reason,
/// including an unknown city (HTTP 404).
///
/// Used in: `infrastructure/weather.rs`
pub const WEATHER_FETCH_ERROR: &str = "Failed to fetch weather data";

/// Environment variable overriding the configured weather API key.
///
/// Used in: `infrastructure/config.rs`
pub const WEATHER_API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
