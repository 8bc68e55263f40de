// src/application/mod.rs
pub mod analytics;
pub mod note_board;
pub mod session;
pub mod widget;

pub use analytics::{summarize, AnalyticsSummary, UserStat};
pub use note_board::{NoteBoard, NoteStore};
pub use session::{Credentials, Session, SessionGate, SessionStore};
pub use widget::FetchState;
