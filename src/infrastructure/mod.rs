// src/infrastructure/mod.rs
pub mod config;
pub mod directory;
pub mod json_store;
pub mod session_file;
pub mod weather;

pub use config::Config;
pub use directory::DirectoryClient;
pub use json_store::JsonNoteStore;
pub use session_file::FileSessionStore;
pub use weather::WeatherClient;
