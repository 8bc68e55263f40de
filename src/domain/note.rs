// src/domain/note.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board column a note is filed under. Serialized as the lowercase name so
/// the stored slot stays `{"id":…,"text":…,"priority":"normal"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Important,
    Normal,
    Delayed,
}

impl Priority {
    /// Column order as rendered on the board.
    pub const ALL: [Priority; 3] = [Priority::Important, Priority::Normal, Priority::Delayed];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Important => "important",
            Priority::Normal => "normal",
            Priority::Delayed => "delayed",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "important" => Ok(Priority::Important),
            "normal" => Ok(Priority::Normal),
            "delayed" => Ok(Priority::Delayed),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub priority: Priority,
}
